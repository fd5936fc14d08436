use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Score used for ranking when a node carries none.
pub const DEFAULT_NODE_SCORE: f64 = 1.0;

/// Decode an explicit `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whitespace as the chat interface trims it: U+FEFF counts, U+0085 does not
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}

/// A single retrieved reference attached to a chat response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceNode {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Empty when the node has no link.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

impl SourceNode {
    pub fn new<I: Into<String>, U: Into<String>>(id: I, url: U) -> Self {
        SourceNode {
            id: id.into(),
            metadata: Map::new(),
            score: None,
            text: String::new(),
            url: url.into(),
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_metadata<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// The score used for ranking; an unscored node counts as maximally relevant
    pub fn effective_score(&self) -> f64 {
        self.score.unwrap_or(DEFAULT_NODE_SCORE)
    }

    pub fn has_url(&self) -> bool {
        !is_blank(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<SourceNode>,
}

impl SourceData {
    pub fn new(nodes: Vec<SourceNode>) -> Self {
        SourceData { nodes }
    }
}
