// JSON corpus importer.
//
// The pipeline takes a finite, already-parsed Vec<Document>; this is the
// thin glue that produces one from a collaborator-supplied file. The
// expected shape is a JSON array of paper records. Records without an id
// are dropped with a warning rather than failing the whole import.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::AnalysisError;

use super::Document;

/// Load a corpus from a JSON file containing an array of paper records.
pub fn from_json_file(path: &Path) -> Result<Vec<Document>, AnalysisError> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&raw)?;

    let total = records.len();
    let mut documents = Vec::with_capacity(total);

    for record in records {
        match serde_json::from_value::<Document>(record) {
            Ok(doc) if !doc.id.is_empty() => documents.push(doc),
            Ok(_) => warn!("skipping record with empty id"),
            Err(e) => warn!(error = %e, "skipping unparseable record"),
        }
    }

    info!(
        imported = documents.len(),
        total,
        path = %path.display(),
        "Corpus imported"
    );
    Ok(documents)
}
