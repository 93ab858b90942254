// Pipeline coordination — sequences the analysis stages over a corpus
// snapshot and assembles the result bundle.

pub mod analyze;

pub use analyze::{run, AnalysisResult};
