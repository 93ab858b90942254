// Citation aggregates over the corpus.

use serde::{Deserialize, Serialize};

use crate::corpus::Document;

/// Papers cited more than this count as highly cited.
const HIGHLY_CITED_THRESHOLD: u32 = 50;

/// Corpus-level citation statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationStats {
    pub paper_count: usize,
    pub total_citations: u64,
    pub mean_citations: f64,
    pub median_citations: u32,
    pub max_citations: u32,
    pub h_index: u32,
    pub highly_cited_papers: usize,
}

/// Compute citation statistics. An empty corpus yields all zeros.
pub fn citation_stats(docs: &[Document]) -> CitationStats {
    let mut citations: Vec<u32> = docs.iter().map(|d| d.citations).collect();
    citations.sort_unstable();

    let paper_count = citations.len();
    let total_citations: u64 = citations.iter().map(|&c| u64::from(c)).sum();
    let mean_citations = if paper_count == 0 {
        0.0
    } else {
        total_citations as f64 / paper_count as f64
    };
    let median_citations = if paper_count == 0 {
        0
    } else {
        citations[paper_count / 2]
    };

    CitationStats {
        paper_count,
        total_citations,
        mean_citations,
        median_citations,
        max_citations: citations.last().copied().unwrap_or(0),
        h_index: h_index(&citations),
        highly_cited_papers: citations
            .iter()
            .filter(|&&c| c > HIGHLY_CITED_THRESHOLD)
            .count(),
    }
}

/// The h-index: the largest h such that h papers have ≥ h citations.
/// Input may be in any order.
pub fn h_index(citations: &[u32]) -> u32 {
    let mut sorted: Vec<u32> = citations.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let mut h = 0;
    for (i, &c) in sorted.iter().enumerate() {
        if c as usize >= i + 1 {
            h = (i + 1) as u32;
        } else {
            break;
        }
    }
    h
}
