//! Seeded, reproducible row sampling.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::pipelines::conllu::types::Document;

/// Fixed shuffle seed. Keeping it constant means the same subset
/// yields the same sample across runs.
pub const SAMPLE_SEED: u64 = 42;

/// Shuffle `rows` with a seeded RNG and keep the first
/// `min(sample_size, rows.len())` of them.
pub fn sample_rows(mut rows: Vec<Document>, sample_size: usize, seed: u64) -> Vec<Document> {
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);
    rows.truncate(sample_size);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::conllu::types::DocMetadata;

    fn docs(nb: usize) -> Vec<Document> {
        (0..nb)
            .map(|x| {
                Document::new(
                    format!("doc-{}", x),
                    format!("document number {}", x),
                    "test".to_string(),
                    DocMetadata::default(),
                )
            })
            .collect()
    }

    #[test]
    fn test_deterministic() {
        let a = sample_rows(docs(100), 10, SAMPLE_SEED);
        let b = sample_rows(docs(100), 10, SAMPLE_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_changes_selection() {
        let a = sample_rows(docs(100), 10, SAMPLE_SEED);
        let b = sample_rows(docs(100), 10, SAMPLE_SEED + 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_truncates_to_available() {
        let sampled = sample_rows(docs(5), 10, SAMPLE_SEED);
        assert_eq!(sampled.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let sampled = sample_rows(Vec::new(), 10, SAMPLE_SEED);
        assert!(sampled.is_empty());
    }
}
