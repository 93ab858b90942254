// Unit tests for the normalizer: tokenization, canonicalization,
// phrase detection, and keyword-term handling through the public API.

use std::collections::BTreeSet;

use lacuna::config::{CanonicalPair, NormalizerConfig};
use lacuna::corpus::Document;
use lacuna::normalize::Normalizer;

fn doc(id: &str, title: &str, abstract_text: &str, keywords: &[&str]) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        year: Some(2024),
        citations: 0,
        journal: String::new(),
    }
}

fn default_normalizer() -> Normalizer {
    Normalizer::new(&NormalizerConfig::default()).unwrap()
}

// ============================================================
// Tokenization and filtering
// ============================================================

#[test]
fn missing_abstract_and_keywords_never_error() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "", &[]));
    assert!(nd.tokens.is_empty());
    assert!(nd.keyword_terms.is_empty());
}

#[test]
fn single_character_tokens_are_discarded() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "a b c hotel", &[]));
    assert_eq!(nd.tokens, vec!["hotel"]);
}

#[test]
fn numeric_tokens_never_appear() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "2023 visitors reached 4500 daily", &[]));
    assert!(nd.tokens.iter().all(|t| !t.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn base_and_academic_stopwords_are_both_dropped() {
    let n = default_normalizer();
    // "the", "of" are base stopwords; "study", "findings" academic
    let nd = n.normalize(&doc("w1", "", "The findings of the study concern hotels", &[]));
    assert_eq!(nd.tokens, vec!["concern", "hotel"]);
}

// ============================================================
// Canonicalization
// ============================================================

#[test]
fn plural_variants_collapse_to_singular() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "destinations attract tourists", &[]));
    assert!(nd.tokens.contains(&"destination".to_string()));
    assert!(nd.tokens.contains(&"tourist".to_string()));
}

#[test]
fn synonym_family_collapses_to_head_term() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "sustainability and eco-tourism grow", &[]));
    assert!(nd.tokens.contains(&"sustainable".to_string()));
    assert!(nd.tokens.contains(&"ecotourism".to_string()));
}

#[test]
fn custom_canonical_pairs_are_applied() {
    let config = NormalizerConfig {
        canonical_map: vec![CanonicalPair {
            variant: "guests".to_string(),
            canonical: "guest".to_string(),
        }],
        ..NormalizerConfig::default()
    };
    let n = Normalizer::new(&config).unwrap();
    let nd = n.normalize(&doc("w1", "", "guests arrive", &[]));
    assert!(nd.tokens.contains(&"guest".to_string()));
}

#[test]
fn conflicting_canonical_map_fails_at_construction() {
    let config = NormalizerConfig {
        canonical_map: vec![
            CanonicalPair {
                variant: "guests".to_string(),
                canonical: "guest".to_string(),
            },
            CanonicalPair {
                variant: "guests".to_string(),
                canonical: "visitor".to_string(),
            },
        ],
        ..NormalizerConfig::default()
    };
    assert!(Normalizer::new(&config).is_err());
}

// ============================================================
// Phrase detection
// ============================================================

#[test]
fn matched_phrase_is_additional_not_replacing() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "smart tourism adoption", &[]));
    // Compound emitted...
    assert_eq!(nd.phrases, vec!["smart tourism"]);
    // ...and constituents still present
    assert!(nd.tokens.contains(&"smart".to_string()));
    assert!(nd.tokens.contains(&"tourism".to_string()));
}

#[test]
fn repeated_phrase_is_emitted_per_occurrence() {
    let n = default_normalizer();
    let nd = n.normalize(&doc(
        "w1",
        "Smart tourism governance",
        "Smart tourism requires shared data platforms.",
        &[],
    ));
    assert_eq!(nd.phrases, vec!["smart tourism", "smart tourism"]);
}

// ============================================================
// Keyword terms
// ============================================================

#[test]
fn multi_word_keywords_stay_whole() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "", &["Sustainable Tourism"]));
    assert_eq!(nd.keyword_terms, vec!["sustainable tourism"]);
}

#[test]
fn keyword_variants_map_to_abbreviations() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "", &["Artificial Intelligence", "virtual reality"]));
    assert_eq!(nd.keyword_terms, vec!["ai", "vr"]);
}

#[test]
fn stopword_keywords_are_dropped() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "", &["study", "the"]));
    assert!(nd.keyword_terms.is_empty());
}

#[test]
fn detected_phrases_join_the_keyword_terms() {
    let n = default_normalizer();
    let nd = n.normalize(&doc("w1", "", "growth of dark tourism sites", &["heritage"]));
    assert_eq!(nd.keyword_terms, vec!["heritage", "dark tourism"]);
}

// ============================================================
// Idempotence
// ============================================================

#[test]
fn double_normalization_is_a_fixed_point() {
    let n = default_normalizer();
    let first = n.normalize(&doc(
        "w1",
        "Sustainability and smart tourism",
        "Machine learning reshapes destinations for tourists.",
        &[],
    ));

    let rebuilt = first
        .tokens
        .iter()
        .chain(first.phrases.iter())
        .cloned()
        .collect::<Vec<_>>()
        .join(". ");
    let second = n.normalize(&doc("w1", "", &rebuilt, &[]));

    let first_set: BTreeSet<String> = first.tokens.iter().chain(first.phrases.iter()).cloned().collect();
    let second_set: BTreeSet<String> =
        second.tokens.iter().chain(second.phrases.iter()).cloned().collect();
    assert_eq!(first_set, second_set);
}

#[test]
fn token_set_matches_normalize_output() {
    let n = default_normalizer();
    let text = "Tourists value sustainable destinations.";
    let nd = n.normalize(&doc("w1", "", text, &[]));
    let set = n.token_set(text);
    for token in &nd.tokens {
        assert!(set.contains(token), "token_set missing {token}");
    }
}
