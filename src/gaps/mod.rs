// Research-gap extraction — from raw abstracts to ranked clusters of
// recurring "limitation / future research" statements.
//
// Extraction is per-document and parallel; clustering is a reduction
// over all extracted statements. Every statement lands in exactly one
// cluster — the clusters partition the extraction output.

pub mod cluster;
pub mod patterns;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GapConfig;
use crate::corpus::Document;
use crate::error::AnalysisError;
use crate::normalize::Normalizer;

/// One sentence expressing an acknowledged limitation or suggested
/// future direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapStatement {
    pub id: usize,
    pub text: String,
    pub doc_id: String,
    pub year: Option<i32>,
    /// Id of the cluster this statement belongs to.
    pub cluster: usize,
}

/// A group of semantically similar gap statements treated as one
/// recurring research need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapCluster {
    pub id: usize,
    /// The most central member's phrasing.
    pub representative: String,
    pub member_count: usize,
    /// Member statement ids.
    pub members: Vec<usize>,
    /// Earliest publication year among members, when known.
    pub earliest_year: Option<i32>,
}

/// Extraction + clustering output for one corpus snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub statements: Vec<GapStatement>,
    /// Ranked: member count descending, then earliest member year
    /// ascending (persistent gaps first), then deterministic order.
    pub clusters: Vec<GapCluster>,
}

/// Run the full gap analysis over raw documents.
///
/// A document with no matching sentences contributes nothing — that is
/// the common case, not an error.
pub fn extract_gaps(
    docs: &[Document],
    normalizer: &Normalizer,
    config: &GapConfig,
) -> Result<GapAnalysis, AnalysisError> {
    let matcher = patterns::GapMatcher::new(config)?;
    let statements = patterns::extract_statements(docs, &matcher, config);
    let analysis = cluster::cluster_statements(statements, normalizer, config);

    info!(
        statements = analysis.statements.len(),
        clusters = analysis.clusters.len(),
        "Gap extraction finished"
    );
    Ok(analysis)
}
