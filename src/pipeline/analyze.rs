// Full analysis pipeline: normalize → enrich → statistics, topics, and
// gaps → one immutable result bundle.
//
// Stage order matters only where data flows: keyword statistics and the
// topic model both need the normalized corpus, the gap extractor works
// from raw abstracts. A topic-stage insufficient-vocabulary failure is
// recorded in the bundle as a typed not-computable outcome — the other
// statistics still complete.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::corpus::Document;
use crate::error::AnalysisError;
use crate::gaps::{self, GapAnalysis};
use crate::normalize::{salience, Normalizer};
use crate::stats::{citations, frequency, network, CitationStats, CooccurrenceNetwork, KeywordRecord};
use crate::topics::{DocTermMatrix, LdaModel, TopicModeler, TopicOutcome};

/// Everything one analysis run produces. Constructed once per corpus
/// snapshot and never mutated — a changed corpus gets a fresh run, not
/// an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub corpus_size: usize,
    pub analyzed_at: String,
    pub keywords: Vec<KeywordRecord>,
    pub topics: TopicOutcome,
    pub gaps: GapAnalysis,
    pub citations: CitationStats,
    pub network: CooccurrenceNetwork,
}

/// Run the whole pipeline over a corpus.
pub fn run(docs: &[Document], config: &AnalysisConfig) -> Result<AnalysisResult, AnalysisError> {
    config.validate()?;
    if docs.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }

    // Step 1: per-document normalization (parallel map).
    let normalizer = Normalizer::new(&config.normalizer)?;
    let pb = ProgressBar::new(docs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Normalizing [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );
    let mut normalized: Vec<_> = docs
        .par_iter()
        .map(|doc| {
            let nd = normalizer.normalize(doc);
            pb.inc(1);
            nd
        })
        .collect();
    pb.finish_and_clear();
    info!(documents = normalized.len(), "Corpus normalized");

    // Step 2: corpus-level salient-term enrichment.
    salience::enrich_keywords(docs, &mut normalized, &normalizer, &config.normalizer);

    // Step 3: keyword frequency and burst statistics.
    let keywords = frequency::keyword_records(&normalized, &config.burst);

    // Step 4: topic model. Too little vocabulary is a typed outcome,
    // not a pipeline failure.
    let matrix = DocTermMatrix::build(&normalized, &config.topics);
    let topics = match LdaModel.fit(&matrix, &config.topics) {
        Ok(result) => TopicOutcome::Fitted(result),
        Err(e @ AnalysisError::InsufficientVocabulary { .. }) => {
            warn!(error = %e, "Topic model skipped");
            TopicOutcome::NotComputable {
                reason: e.to_string(),
            }
        }
        Err(e) => return Err(e),
    };

    // Step 5: gap extraction over raw abstracts.
    let gaps = gaps::extract_gaps(docs, &normalizer, &config.gaps)?;

    // Step 6: corpus-level aggregates.
    let citations = citations::citation_stats(docs);
    let network = network::cooccurrence_network(&normalized, &keywords, &config.network);

    Ok(AnalysisResult {
        corpus_size: docs.len(),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        keywords,
        topics,
        gaps,
        citations,
        network,
    })
}
