//! Gzip JSONL sample reader.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::Error;
use crate::pipelines::conllu::types::Document;

/// Iterator over the documents of a serialized sample.
///
/// Rows are yielded in file order, one parsed [Document] per line.
#[derive(Debug)]
pub struct SampleReader<T>
where
    T: Read,
{
    lines: Lines<BufReader<GzDecoder<T>>>,
}

impl SampleReader<File> {
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let handle = File::open(src)?;
        Ok(Self::new(handle))
    }
}

impl<T> SampleReader<T>
where
    T: Read,
{
    pub fn new(src: T) -> Self {
        let br = BufReader::new(GzDecoder::new(src));
        Self { lines: br.lines() }
    }
}

impl<T> Iterator for SampleReader<T>
where
    T: Read,
{
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            if line.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str::<Document>(&line).map_err(Error::Serde));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    use super::*;

    fn gen_data(nb: usize) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        for i in 0..nb {
            writeln!(
                enc,
                r#"{{"id": "doc-{}", "text": "document {}", "source": "test"}}"#,
                i, i
            )
            .unwrap();
        }
        enc.finish().unwrap()
    }

    #[test]
    fn test_read_all() {
        let data = gen_data(10);
        let reader = SampleReader::new(Cursor::new(data));

        let docs: Result<Vec<Document>, Error> = reader.collect();
        let docs = docs.unwrap();
        assert_eq!(docs.len(), 10);
        assert_eq!(docs[3].id(), "doc-3");
    }

    #[test]
    fn test_order_preserved() {
        let data = gen_data(5);
        let reader = SampleReader::new(Cursor::new(data));

        let ids: Vec<String> = reader.map(|d| d.unwrap().id().to_string()).collect();
        assert_eq!(ids, vec!["doc-0", "doc-1", "doc-2", "doc-3", "doc-4"]);
    }

    #[test]
    fn test_empty_sample() {
        let enc = GzEncoder::new(Vec::new(), Compression::default());
        let data = enc.finish().unwrap();

        let mut reader = SampleReader::new(Cursor::new(data));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_malformed_line_is_err() {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        writeln!(enc, "not json").unwrap();
        let data = enc.finish().unwrap();

        let mut reader = SampleReader::new(Cursor::new(data));
        assert!(reader.next().unwrap().is_err());
    }
}
