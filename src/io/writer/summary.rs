//! CSV run summary writer.
use std::fs::File;
use std::path::Path;

use crate::error::Error;
use crate::metadata::SliceMeta;

/// Writes the per-slice metadata of a run as a single CSV table.
///
/// A summary is written once per run and replaces any previous summary
/// at the same path.
pub struct SummaryWriter;

impl SummaryWriter {
    pub fn write_all(dst: &Path, rows: &[SliceMeta]) -> Result<(), Error> {
        if let Some(parent) = dst.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut wtr = csv::Writer::from_writer(File::create(dst)?);
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
