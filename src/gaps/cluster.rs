// Gap statement clustering — grouping near-duplicate research needs.
//
// Similarity is Jaccard overlap between canonical token sets: two
// statements phrased differently but built from the same canonical
// vocabulary ("future research should examine X" / "future studies
// should explore X") land together. Clustering is greedy in statement
// order — each statement joins the existing cluster it is most similar
// to (mean similarity to members at or above the threshold) or starts
// its own — which keeps the result deterministic.

use std::collections::BTreeSet;

use crate::config::GapConfig;
use crate::normalize::Normalizer;

use super::{GapAnalysis, GapCluster, GapStatement};

/// Jaccard similarity between two token sets. Empty sets share nothing.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Group statements into clusters, pick representatives, and rank.
///
/// Every statement joins exactly one cluster — singletons included, so
/// the clusters partition the input.
pub fn cluster_statements(
    mut statements: Vec<GapStatement>,
    normalizer: &Normalizer,
    config: &GapConfig,
) -> GapAnalysis {
    let token_sets: Vec<BTreeSet<String>> = statements
        .iter()
        .map(|s| normalizer.token_set(&s.text))
        .collect();

    // Member lists hold indices into `statements`.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for i in 0..statements.len() {
        let mut best: Option<(usize, f64)> = None;
        for (gi, members) in groups.iter().enumerate() {
            let mean: f64 = members
                .iter()
                .map(|&j| jaccard(&token_sets[i], &token_sets[j]))
                .sum::<f64>()
                / members.len() as f64;
            if mean >= config.similarity_threshold
                && best.is_none_or(|(_, score)| mean > score)
            {
                best = Some((gi, mean));
            }
        }
        match best {
            Some((gi, _)) => groups[gi].push(i),
            None => groups.push(vec![i]),
        }
    }

    // Representative: the member closest to its co-members on average —
    // the most typical phrasing, not the first or longest.
    let mut clusters: Vec<GapCluster> = groups
        .iter()
        .map(|members| {
            let representative_idx = *members
                .iter()
                .max_by(|&&a, &&b| {
                    let mean = |i: usize| -> f64 {
                        if members.len() == 1 {
                            return 1.0;
                        }
                        members
                            .iter()
                            .filter(|&&j| j != i)
                            .map(|&j| jaccard(&token_sets[i], &token_sets[j]))
                            .sum::<f64>()
                            / (members.len() - 1) as f64
                    };
                    mean(a)
                        .partial_cmp(&mean(b))
                        .unwrap_or(std::cmp::Ordering::Equal)
                        .then(b.cmp(&a)) // ties → earliest statement
                })
                .expect("clusters are never empty");

            GapCluster {
                id: 0, // assigned after ranking
                representative: statements[representative_idx].text.clone(),
                member_count: members.len(),
                members: members.iter().map(|&i| statements[i].id).collect(),
                earliest_year: members.iter().filter_map(|&i| statements[i].year).min(),
            }
        })
        .collect();

    // Rank: biggest first; among equals the older gap wins — a need
    // that has gone unmet longer signals durability. Year-less clusters
    // sort after dated ones, and first-member id settles exact ties.
    clusters.sort_by(|a, b| {
        b.member_count
            .cmp(&a.member_count)
            .then_with(|| {
                a.earliest_year
                    .unwrap_or(i32::MAX)
                    .cmp(&b.earliest_year.unwrap_or(i32::MAX))
            })
            .then_with(|| a.members.cmp(&b.members))
    });

    for (rank, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = rank;
        for &member_id in &cluster.members {
            statements[member_id].cluster = rank;
        }
    }

    GapAnalysis {
        statements,
        clusters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizerConfig;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn statement(id: usize, doc_id: &str, year: Option<i32>, text: &str) -> GapStatement {
        GapStatement {
            id,
            text: text.to_string(),
            doc_id: doc_id.to_string(),
            year,
            cluster: 0,
        }
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(&NormalizerConfig::default()).unwrap()
    }

    #[test]
    fn jaccard_identical_sets_is_one() {
        let a = set(&["ai", "adoption"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn jaccard_disjoint_sets_is_zero() {
        assert_eq!(jaccard(&set(&["ai"]), &set(&["hotel"])), 0.0);
    }

    #[test]
    fn jaccard_empty_sets_share_nothing() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
        assert_eq!(jaccard(&set(&[]), &set(&["ai"])), 0.0);
    }

    #[test]
    fn near_duplicates_merge_into_one_cluster() {
        let statements = vec![
            statement(
                0,
                "w1",
                Some(2023),
                "Future research should examine long-term effects of AI adoption.",
            ),
            statement(
                1,
                "w2",
                Some(2024),
                "Future studies should explore long-term AI adoption effects.",
            ),
        ];
        let config = GapConfig {
            similarity_threshold: 0.5,
            ..GapConfig::default()
        };
        let analysis = cluster_statements(statements, &normalizer(), &config);
        assert_eq!(analysis.clusters.len(), 1);
        assert_eq!(analysis.clusters[0].member_count, 2);
    }

    #[test]
    fn dissimilar_statements_stay_apart() {
        let statements = vec![
            statement(0, "w1", Some(2023), "Future research should examine AI adoption."),
            statement(1, "w2", Some(2024), "This study is limited to coastal hotels in winter."),
        ];
        let analysis = cluster_statements(statements, &normalizer(), &GapConfig::default());
        assert_eq!(analysis.clusters.len(), 2);
    }

    #[test]
    fn clusters_partition_the_statements() {
        let statements = vec![
            statement(0, "w1", Some(2022), "Future research should examine AI adoption."),
            statement(1, "w2", Some(2023), "Future studies should examine AI adoption."),
            statement(2, "w3", Some(2024), "This study is limited to one destination."),
            statement(3, "w4", None, "Little is known about repeat visitation patterns."),
        ];
        let analysis = cluster_statements(statements, &normalizer(), &GapConfig::default());

        let mut seen = std::collections::HashSet::new();
        for cluster in &analysis.clusters {
            assert_eq!(cluster.member_count, cluster.members.len());
            for &member in &cluster.members {
                assert!(seen.insert(member), "statement {member} in two clusters");
            }
        }
        assert_eq!(seen.len(), analysis.statements.len());

        // Statement back-references agree with cluster membership
        for s in &analysis.statements {
            assert!(analysis.clusters[s.cluster].members.contains(&s.id));
        }
    }

    #[test]
    fn bigger_clusters_rank_first_singletons_last() {
        let statements = vec![
            statement(0, "w1", Some(2024), "This study is limited to one destination."),
            statement(1, "w2", Some(2023), "Future research should examine AI adoption."),
            statement(2, "w3", Some(2023), "Future studies should examine AI adoption."),
        ];
        let analysis = cluster_statements(statements, &normalizer(), &GapConfig::default());
        assert_eq!(analysis.clusters[0].member_count, 2);
        assert_eq!(analysis.clusters.last().unwrap().member_count, 1);
    }

    #[test]
    fn equal_size_ties_favor_older_gaps() {
        let statements = vec![
            statement(0, "w1", Some(2024), "This study is limited to one destination."),
            statement(1, "w2", Some(2019), "Little is known about repeat visitation."),
        ];
        let analysis = cluster_statements(statements, &normalizer(), &GapConfig::default());
        assert_eq!(analysis.clusters[0].earliest_year, Some(2019));
    }

    #[test]
    fn representative_is_the_most_central_member() {
        // Two identical statements and one partial overlap: one of the
        // identical pair must represent the cluster.
        let statements = vec![
            statement(0, "w1", Some(2023), "Future research should examine AI adoption in hotels."),
            statement(1, "w2", Some(2023), "Future research should examine AI adoption in hotels."),
            statement(2, "w3", Some(2024), "Future research should examine AI adoption in airlines."),
        ];
        let config = GapConfig {
            similarity_threshold: 0.4,
            ..GapConfig::default()
        };
        let analysis = cluster_statements(statements, &normalizer(), &config);
        assert_eq!(analysis.clusters.len(), 1);
        assert!(analysis.clusters[0]
            .representative
            .contains("hotels"));
    }
}
