// Topic model result types.
//
// A fitted model describes each topic as a distribution over terms and
// each document as a distribution over topics. Assignments are soft —
// the dominant topic is derived as the argmax, but the full
// distribution is always carried.

use serde::{Deserialize, Serialize};

/// One term with its weight inside a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermWeight {
    pub term: String,
    pub weight: f64,
}

/// A latent topic: id in [0, K), top terms by weight, and the documents
/// that express it most strongly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: usize,
    /// Highest-weight terms, descending; ties broken alphabetically.
    pub terms: Vec<TermWeight>,
    /// Document ids with the highest posterior for this topic, across
    /// all documents — not just those it dominates.
    pub representative_docs: Vec<String>,
}

/// A document's soft topic assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocTopics {
    pub doc_id: String,
    /// Probability per topic; sums to 1.
    pub distribution: Vec<f64>,
    /// Argmax of `distribution`.
    pub dominant: usize,
}

/// A complete fitted topic model for one corpus snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicModelResult {
    pub topics: Vec<Topic>,
    pub assignments: Vec<DocTopics>,
    /// False when the fit stopped at the iteration cap or time budget
    /// instead of meeting the convergence tolerance. Not an error —
    /// the caller decides whether to retry with a larger budget.
    pub converged: bool,
    /// Gibbs sweeps actually performed.
    pub iterations: usize,
    /// Final model log-likelihood.
    pub log_likelihood: f64,
}

/// Topic modeling outcome inside an analysis bundle: either a fitted
/// model or a typed "not computable" marker (e.g. vocabulary smaller
/// than K). Keeping this in the bundle lets the rest of the run
/// complete when only the topic stage lacks data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopicOutcome {
    Fitted(TopicModelResult),
    NotComputable { reason: String },
}

impl TopicOutcome {
    pub fn as_fitted(&self) -> Option<&TopicModelResult> {
        match self {
            TopicOutcome::Fitted(result) => Some(result),
            TopicOutcome::NotComputable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_computable_outcome_serializes_with_reason() {
        let outcome = TopicOutcome::NotComputable {
            reason: "insufficient vocabulary".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("not_computable"));
        assert!(json.contains("insufficient vocabulary"));
        assert!(outcome.as_fitted().is_none());
    }
}
