// Keyword statistics — corpus-level frequency, trend, and citation
// aggregates. Everything here is a pure reduction over the normalized
// corpus; it runs after normalization completes.

pub mod burst;
pub mod citations;
pub mod frequency;
pub mod network;

pub use citations::CitationStats;
pub use frequency::KeywordRecord;
pub use network::CooccurrenceNetwork;
