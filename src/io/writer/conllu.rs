//! CoNLL-U slice writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::annotate::ParsedDoc;
use crate::error::Error;

/// Writes annotated documents into one slice file.
///
/// Layout per document: a `# newdoc id = <id>` header, then per sentence
/// one 10-column row per token followed by a blank line.
pub struct ConlluWriter {
    handle: BufWriter<File>,
}

impl ConlluWriter {
    /// Create the destination file, along with missing parent directories.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            handle: BufWriter::new(File::create(dst)?),
        })
    }

    pub fn write_doc(&mut self, id: &str, doc: &ParsedDoc) -> Result<(), Error> {
        writeln!(self.handle, "# newdoc id = {}", id)?;
        for sentence in &doc.sentences {
            for word in &sentence.words {
                writeln!(self.handle, "{}", word)?;
            }
            writeln!(self.handle)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.handle.flush()?;
        Ok(())
    }
}
