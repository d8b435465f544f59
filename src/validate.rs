//! Lenient tallying of annotated output files.
//!
//! Blank lines close sentences, well-formed 10-column lines are tokens,
//! anything else (headers included) is skipped without comment.
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use itertools::Itertools;

use crate::error::Error;

const CONLLU_COLUMNS: usize = 10;
const TOP_N: usize = 10;

/// Frequency table that remembers first-encounter order,
/// so equal counts rank stably.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    counts: HashMap<String, u64>,
    order: Vec<String>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    /// Top `n` entries by descending count.
    pub fn most_common(&self, n: usize) -> Vec<(&str, u64)> {
        self.order
            .iter()
            .map(|k| (k.as_str(), self.counts[k]))
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .take(n)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub tokens: u64,
    pub sentences: u64,
    pub pos: Tally,
    pub deprel: Tally,
}

/// Tally a reader of annotated output.
pub fn validate<R: BufRead>(reader: R) -> Result<Report, Error> {
    let mut report = Report::default();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            report.sentences += 1;
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() != CONLLU_COLUMNS {
            continue;
        }

        report.tokens += 1;
        report.pos.add(parts[3]);
        report.deprel.add(parts[7]);
    }

    Ok(report)
}

pub fn validate_file(src: &Path) -> Result<Report, Error> {
    let handle = File::open(src)?;
    validate(BufReader::new(handle))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total tokens: {}", self.tokens)?;
        writeln!(f, "Total sentences: {}", self.sentences)?;
        writeln!(f, "\nTop POS tags:")?;
        for (tag, count) in self.pos.most_common(TOP_N) {
            writeln!(f, "{}: {}", tag, count)?;
        }
        writeln!(f, "\nTop dependency relations:")?;
        for (dep, count) in self.deprel.most_common(TOP_N) {
            writeln!(f, "{}: {}", dep, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn row(id: usize, upos: &str, deprel: &str) -> String {
        format!(
            "{}\tword\tword\t{}\tNN\t_\t0\t{}\t_\tstart_char=0|end_char=4",
            id, upos, deprel
        )
    }

    fn gen_file() -> String {
        let mut out = String::new();
        out.push_str("# newdoc id = doc-0\n");
        out.push_str(&row(1, "NOUN", "nsubj"));
        out.push('\n');
        out.push_str(&row(2, "VERB", "root"));
        out.push('\n');
        out.push('\n');
        out.push_str(&row(1, "NOUN", "root"));
        out.push('\n');
        out.push('\n');
        out
    }

    #[test]
    fn test_counts() {
        let report = validate(Cursor::new(gen_file())).unwrap();
        assert_eq!(report.tokens, 3);
        assert_eq!(report.sentences, 2);
        assert_eq!(report.pos.most_common(10), vec![("NOUN", 2), ("VERB", 1)]);
        assert_eq!(
            report.deprel.most_common(10),
            vec![("root", 2), ("nsubj", 1)]
        );
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let content = format!(
            "# newdoc id = doc-0\nnot\ta\ttoken\trow\n{}\n\n",
            row(1, "NOUN", "root")
        );
        let report = validate(Cursor::new(content)).unwrap();
        assert_eq!(report.tokens, 1);
        assert_eq!(report.sentences, 1);
    }

    #[test]
    fn test_tie_order_is_first_encountered() {
        let content = format!(
            "{}\n{}\n{}\n{}\n",
            row(1, "VERB", "root"),
            row(2, "NOUN", "obj"),
            row(3, "VERB", "conj"),
            row(4, "NOUN", "obj"),
        );
        let report = validate(Cursor::new(content)).unwrap();
        // VERB and NOUN both occur twice; VERB was seen first
        assert_eq!(report.pos.most_common(10), vec![("VERB", 2), ("NOUN", 2)]);
    }

    #[test]
    fn test_idempotent() {
        let content = gen_file();
        let a = validate(Cursor::new(content.clone())).unwrap();
        let b = validate(Cursor::new(content)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_file() {
        let report = validate(Cursor::new(String::new())).unwrap();
        assert_eq!(report.tokens, 0);
        assert_eq!(report.sentences, 0);
        assert!(report.pos.most_common(10).is_empty());
    }
}
