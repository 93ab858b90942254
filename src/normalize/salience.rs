// Salient-term enrichment — corpus-level keyword supplementation.
//
// Author keywords are sparse and inconsistently supplied, so each
// document's keyword-term set is topped up with its most distinctive
// abstract vocabulary. Distinctiveness comes from corpus-wide TF-IDF
// (the `keyword_extraction` crate): words appearing in every abstract
// get downweighted, words concentrated in a few get boosted.
//
// This is the one normalization step that needs the whole corpus, so it
// runs as a second pass after the per-document normalize — which stays
// pure and corpus-independent.

use std::collections::HashSet;

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::config::NormalizerConfig;
use crate::corpus::Document;

use super::{NormalizedDocument, Normalizer};

/// Add salient abstract terms to each document's keyword-term set.
///
/// Terms are drawn from the top `salient_pool` corpus TF-IDF words,
/// canonicalized, and assigned to every document whose token stream
/// contains them — at most `salient_terms` new terms per document, in
/// pool-rank order.
pub fn enrich_keywords(
    docs: &[Document],
    normalized: &mut [NormalizedDocument],
    normalizer: &Normalizer,
    config: &NormalizerConfig,
) {
    if config.salient_terms == 0 {
        return;
    }

    let abstracts: Vec<String> = docs
        .iter()
        .map(|d| d.abstract_text.clone())
        .filter(|a| !a.is_empty())
        .collect();
    if abstracts.len() < 2 {
        // TF-IDF needs contrast between documents to mean anything.
        return;
    }

    let stop_words: Vec<String> = get(LANGUAGE::English);
    let params = TfIdfParams::UnprocessedDocuments(&abstracts, &stop_words, None);
    let tfidf = TfIdf::new(params);
    let mut ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(config.salient_pool);
    // Equal scores come back in library order; break ties alphabetically
    // so two runs over the same corpus build the same pool.
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    // Canonicalize the pool, keeping rank order and dropping words the
    // normalizer would filter anyway.
    let mut pool = Vec::new();
    let mut seen = HashSet::new();
    for (word, _) in &ranked {
        if let Some(term) = normalizer.normalize_term(word) {
            if seen.insert(term.clone()) {
                pool.push(term);
            }
        }
    }

    debug!(pool = pool.len(), "Salient-term pool built");

    for nd in normalized.iter_mut() {
        let present: HashSet<String> = nd.analysis_tokens().map(str::to_string).collect();
        let mut existing: HashSet<String> = nd.keyword_terms.iter().cloned().collect();
        let mut added = 0;
        for term in &pool {
            if added >= config.salient_terms {
                break;
            }
            if present.contains(term) && existing.insert(term.clone()) {
                nd.keyword_terms.push(term.clone());
                added += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NormalizerConfig;
    use crate::normalize::normalize_corpus;

    fn doc(id: &str, abstract_text: &str) -> Document {
        Document {
            id: id.to_string(),
            title: String::new(),
            abstract_text: abstract_text.to_string(),
            keywords: vec![],
            year: Some(2024),
            citations: 0,
            journal: String::new(),
        }
    }

    #[test]
    fn distinctive_terms_are_added_to_keyword_sets() {
        let config = NormalizerConfig::default();
        let normalizer = Normalizer::new(&config).unwrap();
        let docs = vec![
            doc("w1", "Overtourism pressures coastal destinations and local residents heavily."),
            doc("w2", "Hotel loyalty programs reward frequent guests with upgrades and points."),
            doc("w3", "Overtourism management requires carrying capacity limits for destinations."),
        ];
        let mut normalized = normalize_corpus(&normalizer, &docs);
        enrich_keywords(&docs, &mut normalized, &normalizer, &config);

        // Each document picks up terms only from its own token stream
        assert!(normalized[1]
            .keyword_terms
            .iter()
            .all(|t| normalized[1].analysis_tokens().any(|tok| tok == t)));
        // Documents with distinctive vocabulary gain at least one term
        assert!(!normalized[0].keyword_terms.is_empty());
    }

    #[test]
    fn enrichment_is_a_noop_for_tiny_corpora() {
        let config = NormalizerConfig::default();
        let normalizer = Normalizer::new(&config).unwrap();
        let docs = vec![doc("w1", "A single abstract has no contrast.")];
        let mut normalized = normalize_corpus(&normalizer, &docs);
        enrich_keywords(&docs, &mut normalized, &normalizer, &config);
        assert!(normalized[0].keyword_terms.is_empty());
    }

    #[test]
    fn zero_salient_terms_disables_enrichment() {
        let config = NormalizerConfig {
            salient_terms: 0,
            ..NormalizerConfig::default()
        };
        let normalizer = Normalizer::new(&config).unwrap();
        let docs = vec![
            doc("w1", "Overtourism pressures coastal destinations."),
            doc("w2", "Hotel loyalty programs reward frequent guests."),
        ];
        let mut normalized = normalize_corpus(&normalizer, &docs);
        enrich_keywords(&docs, &mut normalized, &normalizer, &config);
        assert!(normalized.iter().all(|nd| nd.keyword_terms.is_empty()));
    }
}
