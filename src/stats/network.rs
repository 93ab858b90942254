// Keyword co-occurrence network.
//
// Nodes are the corpus's top-frequency terms; an edge's weight is the
// number of documents whose keyword-term sets contain both endpoints.
// Downstream visualization is a collaborator concern — this module only
// produces the structured node/edge data.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::normalize::NormalizedDocument;

use super::KeywordRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub term: String,
    pub frequency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CooccurrenceNetwork {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Build the co-occurrence network from ranked keyword records.
///
/// `records` must already be ranked (frequency descending, term
/// ascending) as `keyword_records` returns them; the first
/// `config.nodes` become the node set.
pub fn cooccurrence_network(
    normalized: &[NormalizedDocument],
    records: &[KeywordRecord],
    config: &NetworkConfig,
) -> CooccurrenceNetwork {
    let nodes: Vec<NetworkNode> = records
        .iter()
        .take(config.nodes)
        .map(|r| NetworkNode {
            term: r.term.clone(),
            frequency: r.total_frequency,
        })
        .collect();
    let node_set: HashSet<&str> = nodes.iter().map(|n| n.term.as_str()).collect();

    // (source, target) pairs with source < target, counted per document.
    let mut weights: BTreeMap<(String, String), u32> = BTreeMap::new();
    for doc in normalized {
        let mut present: Vec<&str> = doc
            .keyword_terms
            .iter()
            .map(String::as_str)
            .filter(|t| node_set.contains(t))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        present.sort_unstable();

        for (i, &a) in present.iter().enumerate() {
            for &b in &present[i + 1..] {
                *weights.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
            }
        }
    }

    let mut edges: Vec<NetworkEdge> = weights
        .into_iter()
        .filter(|&(_, w)| w >= config.min_weight)
        .map(|((source, target), weight)| NetworkEdge {
            source,
            target,
            weight,
        })
        .collect();
    // Heaviest first; the BTreeMap source order makes equal weights
    // deterministic.
    edges.sort_by(|a, b| b.weight.cmp(&a.weight));
    edges.truncate(config.max_edges);

    CooccurrenceNetwork { nodes, edges }
}
