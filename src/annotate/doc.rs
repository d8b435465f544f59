//! Parsed document structure: sentences and annotated token rows.
use std::fmt;

/// One annotated token.
///
/// `id` is 1-based within its sentence, `head` refers to another token's
/// `id` (0 for the sentence root). `start_char`/`end_char` are character
/// offsets into the document text. Absent morphological features are
/// rendered as the `_` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: usize,
    pub text: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: Option<String>,
    pub head: usize,
    pub deprel: String,
    pub start_char: usize,
    pub end_char: usize,
}

impl fmt::Display for Word {
    /// Renders the fixed 10-column tab-separated layout. Column 9 is
    /// reserved and always `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t_\tstart_char={}|end_char={}",
            self.id,
            self.text,
            self.lemma,
            self.upos,
            self.xpos,
            self.feats.as_deref().unwrap_or("_"),
            self.head,
            self.deprel,
            self.start_char,
            self.end_char
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDoc {
    pub sentences: Vec<Sentence>,
}

impl ParsedDoc {
    pub fn n_tokens(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }
}
