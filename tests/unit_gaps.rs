// Unit tests for the gap extractor: pattern filtering, clustering
// behavior, representative selection, and ranking through the public
// API.

use lacuna::config::{GapConfig, NormalizerConfig};
use lacuna::corpus::Document;
use lacuna::gaps::extract_gaps;
use lacuna::normalize::Normalizer;

fn doc(id: &str, year: Option<i32>, abstract_text: &str) -> Document {
    Document {
        id: id.to_string(),
        title: String::new(),
        abstract_text: abstract_text.to_string(),
        keywords: vec![],
        year,
        citations: 0,
        journal: String::new(),
    }
}

fn normalizer() -> Normalizer {
    Normalizer::new(&NormalizerConfig::default()).unwrap()
}

// ============================================================
// Extraction
// ============================================================

#[test]
fn only_matching_sentences_are_extracted() {
    let docs = vec![doc(
        "w1",
        Some(2024),
        "Hotels rely on loyalty programs. Future research should examine \
         their long-term effects. Guests respond to rewards.",
    )];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();
    assert_eq!(analysis.statements.len(), 1);
    assert!(analysis.statements[0].text.contains("Future research"));
}

#[test]
fn documents_without_matches_contribute_nothing() {
    let docs = vec![
        doc("w1", Some(2024), "Hotels rely on loyalty programs."),
        doc("w2", Some(2024), "Guests respond to rewards."),
    ];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();
    assert!(analysis.statements.is_empty());
    assert!(analysis.clusters.is_empty());
}

#[test]
fn statements_carry_source_document_and_year() {
    let docs = vec![doc(
        "w7",
        Some(2021),
        "This study is limited to coastal resorts in one region.",
    )];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();
    assert_eq!(analysis.statements[0].doc_id, "w7");
    assert_eq!(analysis.statements[0].year, Some(2021));
}

#[test]
fn custom_pattern_list_replaces_defaults() {
    let config = GapConfig {
        patterns: vec![r"open problem".to_string()],
        ..GapConfig::default()
    };
    let docs = vec![doc(
        "w1",
        Some(2024),
        "Future research should examine effects. Pricing is an open problem here.",
    )];
    let analysis = extract_gaps(&docs, &normalizer(), &config).unwrap();
    assert_eq!(analysis.statements.len(), 1);
    assert!(analysis.statements[0].text.contains("open problem"));
}

// ============================================================
// Clustering and the partition invariant
// ============================================================

#[test]
fn every_statement_is_in_exactly_one_cluster() {
    let docs = vec![
        doc("w1", Some(2022), "Future research should examine AI adoption in hotels."),
        doc("w2", Some(2023), "Future studies should examine AI adoption in hotels."),
        doc("w3", Some(2023), "This study is limited to one destination."),
        doc("w4", Some(2024), "Little is known about repeat visitation."),
        doc("w5", None, "The mechanism remains unclear for rural tourism."),
    ];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();

    let mut seen = std::collections::HashSet::new();
    let total: usize = analysis
        .clusters
        .iter()
        .map(|c| {
            for &m in &c.members {
                assert!(seen.insert(m), "statement {m} appears in two clusters");
            }
            c.member_count
        })
        .sum();
    assert_eq!(total, analysis.statements.len());

    for statement in &analysis.statements {
        let cluster = &analysis.clusters[statement.cluster];
        assert!(cluster.members.contains(&statement.id));
    }
}

#[test]
fn singleton_clusters_are_retained() {
    let docs = vec![doc(
        "w1",
        Some(2024),
        "Little is known about repeat visitation.",
    )];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();
    assert_eq!(analysis.clusters.len(), 1);
    assert_eq!(analysis.clusters[0].member_count, 1);
}

#[test]
fn near_duplicate_future_research_sentences_merge() {
    // The two phrasings share their canonical vocabulary, so a
    // moderate threshold merges them into one cluster of two.
    let docs = vec![
        doc(
            "w1",
            Some(2023),
            "Future research should examine long-term effects of AI adoption.",
        ),
        doc(
            "w2",
            Some(2024),
            "Future studies should explore long-term AI adoption effects.",
        ),
    ];
    let config = GapConfig {
        similarity_threshold: 0.5,
        ..GapConfig::default()
    };
    let analysis = extract_gaps(&docs, &normalizer(), &config).unwrap();
    assert_eq!(analysis.clusters.len(), 1);
    assert_eq!(analysis.clusters[0].member_count, 2);
}

#[test]
fn high_threshold_keeps_them_apart() {
    let docs = vec![
        doc("w1", Some(2023), "Future research should examine effects of AI adoption in hotels."),
        doc("w2", Some(2024), "Future research should examine effects of robots on loyalty."),
    ];
    let config = GapConfig {
        similarity_threshold: 0.95,
        ..GapConfig::default()
    };
    let analysis = extract_gaps(&docs, &normalizer(), &config).unwrap();
    assert_eq!(analysis.clusters.len(), 2);
}

// ============================================================
// Ranking
// ============================================================

#[test]
fn clusters_rank_by_member_count_then_age() {
    let docs = vec![
        // Singleton from 2020
        doc("w1", Some(2020), "This study is limited to one destination."),
        // Pair from 2023/2024
        doc("w2", Some(2023), "Future research should examine AI adoption in hotels."),
        doc("w3", Some(2024), "Future studies should examine AI adoption in hotels."),
    ];
    let analysis = extract_gaps(&docs, &normalizer(), &GapConfig::default()).unwrap();
    assert_eq!(analysis.clusters[0].member_count, 2);
    assert_eq!(analysis.clusters[0].earliest_year, Some(2023));
    assert_eq!(analysis.clusters[1].member_count, 1);
    // Cluster ids follow rank order
    assert_eq!(analysis.clusters[0].id, 0);
    assert_eq!(analysis.clusters[1].id, 1);
}
