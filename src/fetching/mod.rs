/*! Subset fetching and seeded sampling.

Retrieval of Common Pile subset rows from the dataset hosting service,
and the deterministic sampling step that turns them into a fixed-size,
reproducible sample.
!*/
mod fetcher;
mod sample;

pub use fetcher::Fetcher;
pub use sample::{sample_rows, SAMPLE_SEED};
