// Corpus data model — the immutable paper records the pipeline consumes.
//
// These are plain serde structs kept separate from the analysis logic so
// collaborators (importers, exporters) can use them without pulling in
// any of the pipeline.

pub mod import;

use serde::{Deserialize, Serialize};

/// One academic paper's metadata. Immutable once ingested.
///
/// Every field except `id` tolerates being absent in the source record:
/// missing text fields deserialize to empty strings, missing keywords to
/// an empty list, a missing year to `None`. A sparse record is a
/// degraded signal, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Accepts both `abstract_text` and the `abstract` field name most
    /// exports use ("abstract" is a reserved word in Rust).
    #[serde(default, alias = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub citations: u32,
    #[serde(default)]
    pub journal: String,
}

impl Document {
    /// Title and abstract as one text block, for tokenization.
    pub fn full_text(&self) -> String {
        if self.title.is_empty() {
            self.abstract_text.clone()
        } else if self.abstract_text.is_empty() {
            self.title.clone()
        } else {
            format!("{}. {}", self.title, self.abstract_text)
        }
    }
}
