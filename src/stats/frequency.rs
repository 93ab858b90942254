// Keyword frequency records — document-frequency semantics.
//
// A term's total frequency is the number of documents whose keyword-term
// set contains it at least once, never a raw token count: one verbose
// paper must not dominate a term's weight. Per-year frequencies use the
// same counting restricted to documents published that year.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BurstConfig;
use crate::normalize::NormalizedDocument;

use super::burst;

/// Frequency and trend statistics for one canonical term. One record
/// per distinct term; the set is recomputed per analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub term: String,
    /// Document frequency over the whole corpus.
    pub total_frequency: u32,
    /// Document frequency per publication year. Documents without a
    /// year count toward the total but no bucket.
    pub by_year: BTreeMap<i32, u32>,
    /// Burst score; `None` when the term is below the minimum-occurrence
    /// floor or the corpus spans fewer than 2 distinct years —
    /// "not computable", which zero would misreport as "no trend".
    pub burst: Option<f64>,
}

/// Compute the KeywordRecord set for a normalized corpus.
///
/// Records come back fully ranked: frequency descending, then
/// alphabetical by term, so equal-frequency runs are deterministic.
pub fn keyword_records(
    normalized: &[NormalizedDocument],
    config: &BurstConfig,
) -> Vec<KeywordRecord> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    let mut by_year: HashMap<&str, BTreeMap<i32, u32>> = HashMap::new();

    for doc in normalized {
        // Each document counts once per distinct term.
        let distinct: HashSet<&str> = doc.keyword_terms.iter().map(String::as_str).collect();
        for term in distinct {
            *totals.entry(term).or_insert(0) += 1;
            if let Some(year) = doc.year {
                *by_year.entry(term).or_default().entry(year).or_insert(0) += 1;
            }
        }
    }

    let years: HashSet<i32> = normalized.iter().filter_map(|d| d.year).collect();
    let year_range = years
        .iter()
        .min()
        .zip(years.iter().max())
        .map(|(&lo, &hi)| (lo, hi));
    let enough_years = years.len() >= 2;

    let mut records: Vec<KeywordRecord> = totals
        .into_iter()
        .map(|(term, total_frequency)| {
            let term_years = by_year.remove(term).unwrap_or_default();
            let burst = match year_range {
                Some(range) if enough_years && total_frequency >= config.min_occurrences => {
                    Some(burst::burst_score(&term_years, range, config.window_years))
                }
                _ => None,
            };
            KeywordRecord {
                term: term.to_string(),
                total_frequency,
                by_year: term_years,
                burst,
            }
        })
        .collect();

    records.sort_by(|a, b| {
        b.total_frequency
            .cmp(&a.total_frequency)
            .then_with(|| a.term.cmp(&b.term))
    });

    info!(
        terms = records.len(),
        distinct_years = years.len(),
        "Keyword statistics computed"
    );
    records
}

/// Top-N records by burst score. Ties break by frequency descending,
/// then alphabetically. Records without a score are excluded.
pub fn top_burst(records: &[KeywordRecord], n: usize) -> Vec<&KeywordRecord> {
    let mut bursting: Vec<&KeywordRecord> =
        records.iter().filter(|r| r.burst.is_some()).collect();
    bursting.sort_by(|a, b| {
        b.burst
            .unwrap()
            .partial_cmp(&a.burst.unwrap())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.total_frequency.cmp(&a.total_frequency))
            .then_with(|| a.term.cmp(&b.term))
    });
    bursting.truncate(n);
    bursting
}
