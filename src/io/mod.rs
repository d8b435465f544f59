/*! Readers and writers for the pipeline's persisted formats.

- gzip-compressed JSONL sample files (one document per line),
- CoNLL-U slice files,
- CSV run summaries.
!*/
pub mod reader;
pub mod writer;

pub use reader::SampleReader;
pub use writer::{ConlluWriter, SampleWriter, SummaryWriter};
