//! Sample row types consumed by the annotation pipeline.
mod document;

pub use document::{DocMetadata, Document};
