// Typed errors for the analysis core.
//
// Configuration problems are fatal and surface before any document is
// processed. Insufficient-data conditions are recoverable: the pipeline
// records them as a typed "not computable" outcome and the remaining
// statistics still complete.

use thiserror::Error;

/// Errors produced by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Malformed configuration — conflicting canonical mappings, bad
    /// regex patterns, zero topic count, out-of-range thresholds.
    /// Raised at validation time, never per document.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The filtered vocabulary is too small to fit the requested
    /// number of topics. The topic count is never silently reduced.
    #[error("insufficient vocabulary: {vocabulary} terms after filtering, need at least {requested} for {requested} topics")]
    InsufficientVocabulary { vocabulary: usize, requested: usize },

    /// The corpus has no documents to analyze.
    #[error("empty corpus: no documents to analyze")]
    EmptyCorpus,

    /// Corpus file could not be read.
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus file could not be parsed.
    #[error("failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}
