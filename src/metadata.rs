//! Per-slice run metadata.
use std::path::Path;

use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One summary row per completed slice.
///
/// Audit-only: has no effect on annotation output. The timestamp is
/// captured when the slice finishes writing.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct SliceMeta {
    pub subset: String,
    pub slice: usize,
    pub rows: usize,
    pub output: String,
    pub timestamp: String,
}

impl SliceMeta {
    pub fn new(subset: &str, slice: usize, rows: usize, output: &Path) -> Self {
        Self {
            subset: subset.to_string(),
            slice,
            rows,
            output: output.display().to_string(),
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}
