//! Sample-to-CoNLL-U pipeline.
mod pipeline;
pub mod types;

pub use pipeline::Conllu;
