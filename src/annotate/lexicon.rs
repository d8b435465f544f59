//! Closed-class word lists backing the built-in tagger.
//!
//! Open classes (nouns, verbs, adjectives) are handled by suffix
//! heuristics in the tagger itself.

pub(crate) const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "both", "all",
];

pub(crate) const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "over", "under",
    "between", "through", "during", "without", "within", "about", "against", "among", "as",
];

pub(crate) const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "who", "which", "what",
];

pub(crate) const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "will", "would", "can", "could", "may", "might", "must", "shall", "should",
];

pub(crate) const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet"];

pub(crate) const SUBORDINATORS: &[&str] = &[
    "because", "although", "while", "if", "since", "unless", "whereas", "when", "whether",
];

pub(crate) const PARTICLES: &[&str] = &["not", "n't"];

/// Frequent adverbs that the `-ly` heuristic misses.
pub(crate) const ADVERBS: &[&str] = &[
    "very", "also", "then", "here", "there", "now", "well", "more", "most", "however", "thus",
    "often", "again",
];
