//! Gzip JSONL sample writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Error;
use crate::pipelines::conllu::types::Document;

/// Writes documents as one JSON object per line into a gzip stream.
///
/// The file is fully written once; call [SampleWriter::finish] to flush
/// the gzip trailer.
pub struct SampleWriter {
    enc: GzEncoder<BufWriter<File>>,
}

impl SampleWriter {
    /// Create the destination file, along with missing parent directories.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let handle = BufWriter::new(File::create(dst)?);
        Ok(Self {
            enc: GzEncoder::new(handle, Compression::default()),
        })
    }

    pub fn write(&mut self, docs: &[Document]) -> Result<(), Error> {
        for doc in docs {
            serde_json::to_writer(&mut self.enc, doc)?;
            self.enc.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Finish the gzip stream. Dropping without calling this leaves
    /// a truncated file.
    pub fn finish(self) -> Result<(), Error> {
        self.enc.finish()?.flush()?;
        Ok(())
    }
}
