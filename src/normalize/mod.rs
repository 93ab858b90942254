// Text normalization — raw documents to canonical token streams.
//
// Purely functional given its configuration: no corpus state, no side
// effects, trivially parallel per document. The order of operations
// matters for idempotence: canonicalize first, then filter, so a
// variant that collapses onto a stopword ("models" → "model") is still
// removed.

pub mod canonical;
pub mod phrases;
pub mod salience;
pub mod tokenizer;

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NormalizerConfig;
use crate::corpus::Document;
use crate::error::AnalysisError;

use canonical::CanonicalMap;
use phrases::PhraseMatcher;

/// A document reduced to canonical analysis units. Derived from its
/// source Document, never mutated in place — rebuilt whenever the
/// normalization rules change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Source document id.
    pub doc_id: String,
    /// Publication year carried over for the time-bucketed statistics.
    pub year: Option<i32>,
    /// Ordered canonical single tokens from title + abstract.
    pub tokens: Vec<String>,
    /// Compound tokens for matched phrases, in order of appearance.
    pub phrases: Vec<String>,
    /// The document's keyword-term set: canonical author keywords,
    /// detected phrases, and (after corpus-level enrichment) salient
    /// abstract terms. Ordered, deduplicated.
    pub keyword_terms: Vec<String>,
}

impl NormalizedDocument {
    /// All analysis tokens — singles plus phrase compounds — for the
    /// document–term matrix.
    pub fn analysis_tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(String::as_str)
            .chain(self.phrases.iter().map(String::as_str))
    }
}

/// Tokenizes, canonicalizes, and phrase-matches document text.
pub struct Normalizer {
    stopwords: HashSet<String>,
    map: CanonicalMap,
    phrase_matcher: PhraseMatcher,
    min_token_len: usize,
}

impl Normalizer {
    /// Build a normalizer from configuration. Malformed configuration
    /// (conflicting canonical mappings, bad phrase lengths) errors here,
    /// before any document is touched.
    pub fn new(config: &NormalizerConfig) -> Result<Self, AnalysisError> {
        let map = CanonicalMap::from_config(config)?;

        let mut stopwords: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        stopwords.extend(config.academic_stopwords.iter().map(|s| s.to_lowercase()));

        debug!(
            stopwords = stopwords.len(),
            canonical_pairs = config.canonical_map.len(),
            phrases = config.phrases.len(),
            "Normalizer ready"
        );

        Ok(Self {
            stopwords,
            map,
            phrase_matcher: PhraseMatcher::new(&config.phrases),
            min_token_len: config.min_token_len,
        })
    }

    /// Normalize one document. Missing abstract or keywords are treated
    /// as empty — a sparse record degrades the signal, it never errors.
    pub fn normalize(&self, doc: &Document) -> NormalizedDocument {
        let raw = tokenizer::raw_tokens(&doc.full_text());

        // Single tokens: canonicalize, then filter.
        let mut tokens: Vec<String> = raw
            .iter()
            .filter_map(|t| self.canonical_token(t))
            .collect();

        // Multi-word canonical variants ("artificial intelligence" →
        // "ai") surface as additional single tokens.
        tokens.extend(
            self.map
                .match_multiword(&raw)
                .into_iter()
                .filter(|t| self.keep(t)),
        );

        // Phrases are matched on the raw stream (a phrase may span a
        // stopword) and canonicalized as a whole.
        let phrases: Vec<String> = self
            .phrase_matcher
            .find(&raw)
            .iter()
            .map(|p| self.map.canonical(p).to_string())
            .collect();

        // Author keywords + one entry per distinct detected phrase.
        let mut keyword_terms = Vec::new();
        let mut seen = HashSet::new();
        for kw in &doc.keywords {
            if let Some(term) = self.normalize_term(kw) {
                if seen.insert(term.clone()) {
                    keyword_terms.push(term);
                }
            }
        }
        for phrase in &phrases {
            if seen.insert(phrase.clone()) {
                keyword_terms.push(phrase.clone());
            }
        }

        NormalizedDocument {
            doc_id: doc.id.clone(),
            year: doc.year,
            tokens,
            phrases,
            keyword_terms,
        }
    }

    /// Normalize a free-standing term (an author keyword, a salient
    /// candidate): lowercase, strip punctuation, canonicalize the whole
    /// surface form, then apply the same keep-filter as tokens.
    /// Multi-word terms are kept whole ("sustainable tourism" is one
    /// term).
    pub fn normalize_term(&self, term: &str) -> Option<String> {
        let words = tokenizer::raw_tokens(term);
        if words.is_empty() {
            return None;
        }
        let joined = words.join(" ");
        let canonical = self.map.canonical(&joined).to_string();
        if canonical.contains(' ') {
            // Multi-word terms survive unless every word is a stopword.
            if canonical.split(' ').all(|w| self.stopwords.contains(w)) {
                return None;
            }
            Some(canonical)
        } else {
            self.keep(&canonical).then_some(canonical)
        }
    }

    /// Canonical token set of arbitrary text — used by the gap
    /// extractor for sentence similarity.
    pub fn token_set(&self, text: &str) -> BTreeSet<String> {
        tokenizer::raw_tokens(text)
            .iter()
            .filter_map(|t| self.canonical_token(t))
            .collect()
    }

    fn canonical_token(&self, raw: &str) -> Option<String> {
        let canonical = self.map.canonical(raw);
        self.keep(canonical).then(|| canonical.to_string())
    }

    fn keep(&self, token: &str) -> bool {
        token.len() >= self.min_token_len && !self.stopwords.contains(token)
    }
}

/// Normalize a whole corpus, in parallel, preserving document order.
pub fn normalize_corpus(normalizer: &Normalizer, docs: &[Document]) -> Vec<NormalizedDocument> {
    docs.par_iter().map(|d| normalizer.normalize(d)).collect()
}
