use serde::de::Deserializer;
use serde::Deserialize;
use serde::Serialize;

/// Optional per-document provenance fields.
///
/// Common Pile subsets do not agree on metadata contents, so everything
/// in here is optional and unknown fields are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct DocMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authors: Option<Vec<String>>,
}

impl DocMetadata {
    pub fn new(title: Option<String>, authors: Option<Vec<String>>) -> Self {
        Self { title, authors }
    }

    /// Get a reference to the document title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get a reference to the author list, if any.
    pub fn authors(&self) -> Option<&[String]> {
        self.authors.as_deref()
    }
}

/// A Document is a single sample row: an identifier, the raw text,
/// a provenance tag and optional metadata.
///
/// Subsets disagree on identifier types (strings vs. integers), so
/// deserialization accepts both and normalizes to [String].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Document {
    #[serde(deserialize_with = "id_from_str_or_int")]
    id: String,
    text: String,
    source: String,
    #[serde(default)]
    metadata: DocMetadata,
}

fn id_from_str_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    match v {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid document id: {}",
            other
        ))),
    }
}

impl Document {
    pub fn new(id: String, text: String, source: String, metadata: DocMetadata) -> Self {
        Self {
            id,
            text,
            source,
            metadata,
        }
    }

    /// Get a reference to the document's identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get a reference to the provenance tag.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get a reference to the document's metadata.
    pub fn metadata(&self) -> &DocMetadata {
        &self.metadata
    }
}
