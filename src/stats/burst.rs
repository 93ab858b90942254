// Burst statistic — is a term's recent usage above its own baseline?
//
// The score is the z-score of the recent-window mean against the term's
// full-series mean and standard deviation:
//
//   burst = (mean(last w years) - mean(all years)) / std(all years)
//
// Missing interior years count as zero — a term absent in 2021 was at
// zero in 2021, not unobserved. The series covers the corpus's observed
// year range, so the statistic is invariant to map iteration order and
// deterministic for a fixed corpus.
//
// Whether a score is reported at all (minimum-occurrence floor, fewer
// than 2 distinct corpus years) is decided by the caller in
// `frequency.rs`; this module only computes the statistic.

use std::collections::BTreeMap;

/// Below this, a standard deviation is treated as zero (flat series).
const STD_EPSILON: f64 = 1e-9;

/// Z-score of the recent-window mean against the full series.
///
/// `year_range` is the corpus's observed (min, max) year, inclusive;
/// `window` is the number of trailing years forming the recent window.
/// A flat series scores 0.0.
pub fn burst_score(by_year: &BTreeMap<i32, u32>, year_range: (i32, i32), window: usize) -> f64 {
    let (min_year, max_year) = year_range;
    debug_assert!(min_year <= max_year);

    // Zero-filled series over the whole observed range.
    let series: Vec<f64> = (min_year..=max_year)
        .map(|y| f64::from(by_year.get(&y).copied().unwrap_or(0)))
        .collect();

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let w = window.min(series.len());
    let recent = &series[series.len() - w..];
    let recent_mean = recent.iter().sum::<f64>() / recent.len() as f64;

    if std < STD_EPSILON {
        return 0.0;
    }
    (recent_mean - mean) / std
}
