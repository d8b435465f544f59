//! Built-in rule-based annotation engine.
use std::collections::HashMap;

use log::warn;
use unicode_segmentation::UnicodeSegmentation;

use super::doc::{ParsedDoc, Sentence, Word};
use super::{lexicon, Annotate};
use crate::error::Error;

/// Deterministic CPU annotator.
///
/// Sentence and token boundaries follow Unicode segmentation rules;
/// tagging combines a closed-class lexicon with suffix heuristics, and the
/// dependency layer attaches everything to a single root per sentence.
/// The lexicon is built once at construction: build the handle once per run
/// and reuse it across documents.
pub struct Tagger {
    lexicon: HashMap<&'static str, &'static str>,
}

#[derive(Debug, Default)]
pub struct TaggerBuilder {
    use_gpu: bool,
}

impl TaggerBuilder {
    pub fn use_gpu(mut self, use_gpu: bool) -> Self {
        self.use_gpu = use_gpu;
        self
    }

    pub fn build(self) -> Tagger {
        if self.use_gpu {
            warn!("GPU requested but the built-in tagger is CPU only");
        }
        Tagger::new()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        // last insert wins on words appearing in more than one list
        for (words, upos) in [
            (lexicon::ADVERBS, "ADV"),
            (lexicon::SUBORDINATORS, "SCONJ"),
            (lexicon::COORDINATORS, "CCONJ"),
            (lexicon::PARTICLES, "PART"),
            (lexicon::AUXILIARIES, "AUX"),
            (lexicon::PRONOUNS, "PRON"),
            (lexicon::ADPOSITIONS, "ADP"),
            (lexicon::DETERMINERS, "DET"),
        ] {
            for w in words {
                entries.insert(*w, upos);
            }
        }
        Self { lexicon: entries }
    }

    fn upos_for(&self, token: &str, sentence_initial: bool) -> &'static str {
        if !token.chars().any(|c| c.is_alphanumeric()) {
            return "PUNCT";
        }
        if token.chars().any(|c| c.is_ascii_digit())
            && token
                .chars()
                .all(|c| c.is_ascii_digit() || c == '.' || c == ',' || c == '-')
        {
            return "NUM";
        }

        let lower = token.to_lowercase();
        if let Some(&upos) = self.lexicon.get(lower.as_str()) {
            return upos;
        }
        if !sentence_initial
            && token
                .chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false)
        {
            return "PROPN";
        }
        if lower.len() > 3 && lower.ends_with("ly") {
            return "ADV";
        }
        if lower.len() > 4 && lower.ends_with("ing") {
            return "VERB";
        }
        if lower.len() > 3 && lower.ends_with("ed") {
            return "VERB";
        }
        if lower.len() > 4
            && ["ous", "ful", "ive", "ble", "ical", "ish"]
                .iter()
                .any(|s| lower.ends_with(s))
        {
            return "ADJ";
        }
        "NOUN"
    }

    fn tag_sentence(&self, raw: &[(&str, usize, usize)]) -> Sentence {
        let upos: Vec<&'static str> = raw
            .iter()
            .enumerate()
            .map(|(i, (t, _, _))| self.upos_for(t, i == 0))
            .collect();

        let root = upos
            .iter()
            .position(|&u| u == "VERB")
            .or_else(|| upos.iter().position(|&u| u == "AUX"))
            .or_else(|| upos.iter().position(|&u| u != "PUNCT"))
            .unwrap_or(0);

        let words = raw
            .iter()
            .enumerate()
            .map(|(i, &(t, start, end))| {
                let u = upos[i];
                let (head, deprel) = if i == root {
                    (0, "root")
                } else {
                    attach(i, u, root, &upos)
                };
                let lower = t.to_lowercase();
                Word {
                    id: i + 1,
                    text: t.to_string(),
                    lemma: lemma_for(&lower, u),
                    upos: u.to_string(),
                    xpos: xpos_for(u).to_string(),
                    feats: feats_for(&lower, u),
                    head,
                    deprel: deprel.to_string(),
                    start_char: start,
                    end_char: end,
                }
            })
            .collect();

        Sentence { words }
    }
}

impl Annotate for Tagger {
    fn annotate(&self, text: &str) -> Result<ParsedDoc, Error> {
        if text.trim().is_empty() {
            return Err(Error::Annotation("empty document".to_string()));
        }

        let mut sentences = Vec::new();
        let mut char_base = 0usize;

        for (_, sent) in text.split_sentence_bound_indices() {
            let mut raw: Vec<(&str, usize, usize)> = Vec::new();
            let mut char_pos = char_base;
            for (_, seg) in sent.split_word_bound_indices() {
                let n_chars = seg.chars().count();
                if !seg.trim().is_empty() {
                    raw.push((seg, char_pos, char_pos + n_chars));
                }
                char_pos += n_chars;
            }
            char_base += sent.chars().count();

            if !raw.is_empty() {
                sentences.push(self.tag_sentence(&raw));
            }
        }

        Ok(ParsedDoc { sentences })
    }
}

/// Head (1-based) and relation for a non-root token.
fn attach(i: usize, upos_i: &str, root: usize, upos: &[&'static str]) -> (usize, &'static str) {
    let next_nominal = upos[i + 1..]
        .iter()
        .position(|&u| u == "NOUN" || u == "PROPN")
        .map(|off| i + 1 + off + 1);
    let root_head = root + 1;

    match upos_i {
        "DET" => (next_nominal.unwrap_or(root_head), "det"),
        "ADJ" => (next_nominal.unwrap_or(root_head), "amod"),
        "NUM" => (next_nominal.unwrap_or(root_head), "nummod"),
        "ADP" => (next_nominal.unwrap_or(root_head), "case"),
        "AUX" => (root_head, "aux"),
        "VERB" => (root_head, "conj"),
        "ADV" | "PART" => (root_head, "advmod"),
        "PUNCT" => (root_head, "punct"),
        "CCONJ" => (root_head, "cc"),
        "SCONJ" => (root_head, "mark"),
        _ => (root_head, if i < root { "nsubj" } else { "obj" }),
    }
}

fn xpos_for(upos: &str) -> &'static str {
    match upos {
        "PROPN" => "NNP",
        "VERB" | "AUX" => "VB",
        "ADJ" => "JJ",
        "ADV" => "RB",
        "DET" => "DT",
        "ADP" | "SCONJ" => "IN",
        "PRON" => "PRP",
        "CCONJ" => "CC",
        "NUM" => "CD",
        "PART" => "RP",
        "PUNCT" => ".",
        _ => "NN",
    }
}

fn feats_for(lower: &str, upos: &str) -> Option<String> {
    match upos {
        "NOUN"
            if lower.len() > 3
                && lower.ends_with('s')
                && !lower.ends_with("ss")
                && !lower.ends_with("us") =>
        {
            Some("Number=Plur".to_string())
        }
        "VERB" if lower.ends_with("ing") => Some("VerbForm=Ger".to_string()),
        "VERB" if lower.ends_with("ed") => Some("Tense=Past".to_string()),
        _ => None,
    }
}

fn lemma_for(lower: &str, upos: &str) -> String {
    match upos {
        "NOUN" | "PROPN" => {
            if lower.len() > 4 && lower.ends_with("ies") {
                format!("{}y", &lower[..lower.len() - 3])
            } else if lower.len() > 3
                && lower.ends_with('s')
                && !lower.ends_with("ss")
                && !lower.ends_with("us")
            {
                lower[..lower.len() - 1].to_string()
            } else {
                lower.to_string()
            }
        }
        "VERB" => {
            if lower.len() > 4 && lower.ends_with("ied") {
                format!("{}y", &lower[..lower.len() - 3])
            } else if lower.len() > 5 && lower.ends_with("ing") {
                undouble(&lower[..lower.len() - 3])
            } else if lower.len() > 3 && lower.ends_with("ed") {
                undouble(&lower[..lower.len() - 2])
            } else {
                lower.to_string()
            }
        }
        _ => lower.to_string(),
    }
}

/// Undo consonant doubling on a stripped stem ("runn" -> "run").
/// Endings that double legitimately (call, pass, stuff, buzz) are left alone.
fn undouble(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 3
        && bytes[n - 1] == bytes[n - 2]
        && bytes[n - 1].is_ascii_alphabetic()
        && !b"aeioulsfz".contains(&bytes[n - 1])
    {
        stem[..n - 1].to_string()
    } else {
        stem.to_string()
    }
}
