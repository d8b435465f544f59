//! Read-only sample diagnostics.
//!
//! Does not assume the sample schema: rows are read as raw JSON values,
//! so a sample with unexpected columns still reports cleanly.
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;

use crate::error::Error;

/// How much document text a preview line shows.
const PREVIEW_CHARS: usize = 300;

#[derive(Debug)]
pub struct Summary {
    rows: usize,
    columns: Vec<String>,
    first: Option<Value>,
    preview: Vec<Value>,
}

impl Summary {
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column names of the first row, in serialized order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn first(&self) -> Option<&Value> {
        self.first.as_ref()
    }
}

/// Summarize a serialized sample: row count, column names and first record,
/// plus an optional preview of the first `head` documents.
pub fn summarize(src: &Path, head: usize) -> Result<Summary, Error> {
    let handle = File::open(src)?;
    let reader = BufReader::new(GzDecoder::new(handle));

    let mut rows = 0usize;
    let mut first: Option<Value> = None;
    let mut preview = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)?;
        if first.is_none() {
            first = Some(value.clone());
        }
        if rows < head {
            preview.push(value);
        }
        rows += 1;
    }

    let columns = match &first {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    };

    Ok(Summary {
        rows,
        columns,
        first,
        preview,
    })
}

fn truncated_text(row: &Value) -> String {
    let text = row.get("text").and_then(Value::as_str).unwrap_or("");
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().count() > PREVIEW_CHARS {
        out.push('…');
    }
    out
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample size: {}", self.rows)?;
        writeln!(f, "Columns: {:?}", self.columns)?;
        if let Some(first) = &self.first {
            writeln!(f, "\nFirst row:")?;
            match serde_json::to_string_pretty(first) {
                Ok(pretty) => writeln!(f, "{}", pretty)?,
                Err(_) => writeln!(f, "{}", first)?,
            }
        }
        for (i, row) in self.preview.iter().enumerate() {
            let id = match row.get("id") {
                Some(Value::String(s)) => s.clone(),
                Some(v) => v.to_string(),
                None => String::new(),
            };
            let source = row
                .get("source")
                .and_then(Value::as_str)
                .unwrap_or_default();
            writeln!(f, "\nDoc {} — ID: {}, Source: {}", i, id, source)?;
            writeln!(f, "Text (truncated): {:?}", truncated_text(row))?;
            writeln!(f, "{}", "-".repeat(60))?;
        }
        Ok(())
    }
}
