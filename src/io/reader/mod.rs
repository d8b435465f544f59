//! Sample file reading.
mod sample;

pub use sample::SampleReader;
