//! CoNLL-U generation pipeline.
//!
//! A sample is a sequence of documents,
//! each document holds an identifier and its raw text.
//!
//! # Processing
//! 1. The whole sample is read into memory (a failure here is fatal).
//! 1. Rows are partitioned into consecutive slices of at most `slice_size`
//!    documents.
//! 1. Each document is annotated; a failing document is skipped with a
//!    warning and the slice goes on.
//! 1. Each slice is written once into its own file, named after the subset
//!    and the zero-padded slice index.
//! 1. After the last slice, per-slice metadata is flushed as a CSV summary.
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::annotate::{Annotate, TaggerBuilder};
use crate::error::Error;
use crate::io::reader::SampleReader;
use crate::io::writer::{ConlluWriter, SummaryWriter};
use crate::metadata::SliceMeta;
use crate::pipelines::pipeline::Pipeline;

use super::types::Document;

pub struct Conllu {
    sample: PathBuf,
    dst: PathBuf,
    subset: String,
    slice_size: usize,
    use_gpu: bool,
}

impl Conllu {
    pub fn new(
        sample: PathBuf,
        dst: PathBuf,
        subset: String,
        slice_size: usize,
        use_gpu: bool,
    ) -> Self {
        Self {
            sample,
            dst,
            subset,
            slice_size,
            use_gpu,
        }
    }

    /// Path of slice `idx`, under the subset-specific subdirectory.
    fn slice_path(&self, idx: usize) -> PathBuf {
        self.dst
            .join(&self.subset)
            .join(format!("{}_slice{:04}.conllu", self.subset, idx))
    }

    /// Path of the run summary for this subset.
    fn summary_path(&self) -> PathBuf {
        self.dst.join(format!("{}_summary.csv", self.subset))
    }

    fn write_slice<A: Annotate>(
        &self,
        annotator: &A,
        idx: usize,
        docs: &[Document],
    ) -> Result<SliceMeta, Error> {
        let path = self.slice_path(idx);
        info!(
            "[{}] slice {}: {} documents -> {:?}",
            self.subset,
            idx,
            docs.len(),
            path
        );

        let mut writer = ConlluWriter::create(&path)?;
        for doc in docs {
            match annotator.annotate(doc.text()) {
                Ok(parsed) => writer.write_doc(doc.id(), &parsed)?,
                Err(e) => warn!("[{}] skipping document {}: {}", self.subset, doc.id(), e),
            }
        }
        writer.flush()?;

        Ok(SliceMeta::new(&self.subset, idx, docs.len(), &path))
    }

    /// Run the pipeline with the provided annotation handle.
    ///
    /// Returns the per-slice metadata, in slice order, after having
    /// written it to the summary table.
    pub fn run_with<A: Annotate>(&self, annotator: &A) -> Result<Vec<SliceMeta>, Error> {
        let reader = SampleReader::from_path(&self.sample)?;
        let docs: Result<Vec<Document>, Error> = reader.collect();
        let docs = docs?;
        info!("[{}] loaded {} documents", self.subset, docs.len());

        let slice_size = self.slice_size.max(1);

        let mut summary = Vec::new();
        if docs.is_empty() {
            // a degenerate empty sample still yields one valid, empty slice
            summary.push(self.write_slice(annotator, 0, &[])?);
        } else {
            for (idx, slice) in docs.chunks(slice_size).enumerate() {
                summary.push(self.write_slice(annotator, idx, slice)?);
            }
        }

        SummaryWriter::write_all(&self.summary_path(), &summary)?;
        info!(
            "[{}] done: {} slices, summary at {:?}",
            self.subset,
            summary.len(),
            self.summary_path()
        );

        Ok(summary)
    }
}

impl Pipeline<()> for Conllu {
    fn run(&self) -> Result<(), Error> {
        let tagger = TaggerBuilder::default().use_gpu(self.use_gpu).build();
        self.run_with(&tagger)?;
        Ok(())
    }
}
