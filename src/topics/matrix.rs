// Document–term matrix over the canonical vocabulary.
//
// Rows are documents, columns are canonical terms (singles and phrase
// compounds) that clear a minimum document-frequency bar. Oversized
// vocabularies are pruned by corpus TF-IDF weight so the terms kept are
// the distinctive ones, not just the loudest. Cells hold per-document
// term counts — that is the data the collapsed Gibbs sampler is defined
// over; TF-IDF does its work here, at vocabulary selection.

use std::collections::HashMap;

use tracing::debug;

use crate::config::TopicConfig;
use crate::normalize::NormalizedDocument;

/// One matrix row: a document as a sequence of vocabulary indices.
/// Repetition is preserved — a term used three times appears three
/// times.
#[derive(Debug, Clone)]
pub struct MatrixDoc {
    pub doc_id: String,
    pub token_ids: Vec<usize>,
}

/// The corpus as indexed count data.
#[derive(Debug, Clone)]
pub struct DocTermMatrix {
    /// Index → term, alphabetical for stable, reproducible indices.
    pub vocabulary: Vec<String>,
    pub docs: Vec<MatrixDoc>,
}

impl DocTermMatrix {
    /// Build the matrix from normalized documents.
    ///
    /// Terms below `min_doc_freq` documents are excluded; if more than
    /// `max_vocabulary` terms survive, the top ones by TF-IDF are kept.
    pub fn build(normalized: &[NormalizedDocument], config: &TopicConfig) -> Self {
        let num_docs = normalized.len();

        // Document frequency and total count per term.
        let mut doc_freq: HashMap<&str, u32> = HashMap::new();
        let mut total_count: HashMap<&str, u32> = HashMap::new();
        for doc in normalized {
            let mut seen_in_doc: HashMap<&str, u32> = HashMap::new();
            for token in doc.analysis_tokens() {
                *seen_in_doc.entry(token).or_insert(0) += 1;
            }
            for (token, count) in seen_in_doc {
                *doc_freq.entry(token).or_insert(0) += 1;
                *total_count.entry(token).or_insert(0) += count;
            }
        }

        let mut candidates: Vec<&str> = doc_freq
            .iter()
            .filter(|&(_, &df)| df >= config.min_doc_freq)
            .map(|(&term, _)| term)
            .collect();

        if candidates.len() > config.max_vocabulary {
            // Smoothed TF-IDF: count * (ln((N+1)/(df+1)) + 1). Ties
            // break alphabetically so pruning is deterministic.
            let tfidf = |term: &str| {
                let tf = f64::from(total_count[term]);
                let df = f64::from(doc_freq[term]);
                tf * (((num_docs as f64 + 1.0) / (df + 1.0)).ln() + 1.0)
            };
            candidates.sort_by(|a, b| {
                tfidf(b)
                    .partial_cmp(&tfidf(a))
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.cmp(b))
            });
            candidates.truncate(config.max_vocabulary);
        }

        let mut vocabulary: Vec<String> = candidates.into_iter().map(str::to_string).collect();
        vocabulary.sort();

        let term_index: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let docs: Vec<MatrixDoc> = normalized
            .iter()
            .map(|doc| MatrixDoc {
                doc_id: doc.doc_id.clone(),
                token_ids: doc
                    .analysis_tokens()
                    .filter_map(|t| term_index.get(t).copied())
                    .collect(),
            })
            .collect();

        debug!(
            vocabulary = vocabulary.len(),
            documents = docs.len(),
            "Document-term matrix built"
        );

        Self { vocabulary, docs }
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    /// Total token instances across all rows.
    pub fn total_tokens(&self) -> usize {
        self.docs.iter().map(|d| d.token_ids.len()).sum()
    }
}
