// Central analysis configuration.
//
// Everything tunable is an explicit field on AnalysisConfig, threaded
// into each component's entry point — no module-level lookup tables.
// The struct deserializes from JSON with per-field defaults, so a
// config file only needs to name the fields it overrides.
//
// `validate()` runs once, before any document is processed. Per-document
// code can assume the configuration is well-formed.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Top-level configuration for one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub burst: BurstConfig,
    #[serde(default)]
    pub topics: TopicConfig,
    #[serde(default)]
    pub gaps: GapConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

/// One variant → canonical rewrite rule.
///
/// Kept as an enumerated pair (not a map) so duplicate variants survive
/// deserialization and can be rejected by `validate()` instead of being
/// silently last-writer-wins merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalPair {
    pub variant: String,
    pub canonical: String,
}

/// Tokenization, canonicalization, and phrase detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Domain stopwords dropped in addition to the base English list
    /// (boilerplate academic vocabulary: "study", "findings", ...).
    #[serde(default = "default_academic_stopwords")]
    pub academic_stopwords: Vec<String>,

    /// Variant → canonical rewrite rules (plural collapses, synonym
    /// families, spelled-out forms to their common abbreviation).
    #[serde(default = "default_canonical_pairs")]
    pub canonical_map: Vec<CanonicalPair>,

    /// Controlled multi-word phrase list (2–4 tokens each). A matched
    /// phrase is emitted as one compound token in addition to its
    /// constituent tokens.
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,

    /// Tokens shorter than this are discarded.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// How many salient abstract terms to add to each document's
    /// keyword set during corpus-level enrichment.
    #[serde(default = "default_salient_terms")]
    pub salient_terms: usize,

    /// Size of the corpus-wide TF-IDF ranked pool that salient terms
    /// are drawn from.
    #[serde(default = "default_salient_pool")]
    pub salient_pool: usize,
}

/// Burst detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurstConfig {
    /// How many trailing years form the "recent" window.
    #[serde(default = "default_burst_window")]
    pub window_years: usize,

    /// Terms appearing in fewer documents than this get no burst score
    /// at all — sparse curves spike too easily to be meaningful.
    #[serde(default = "default_burst_floor")]
    pub min_occurrences: u32,
}

/// Topic model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicConfig {
    /// Number of latent topics K.
    #[serde(default = "default_num_topics")]
    pub num_topics: usize,

    /// Explicit RNG seed. Two fits with the same seed, corpus, and
    /// settings produce identical term-weight tables.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Terms must appear in at least this many documents to enter the
    /// vocabulary.
    #[serde(default = "default_min_doc_freq")]
    pub min_doc_freq: u32,

    /// Vocabulary cap; oversized vocabularies are pruned by corpus
    /// TF-IDF weight.
    #[serde(default = "default_max_vocabulary")]
    pub max_vocabulary: usize,

    /// Hard cap on Gibbs sweeps.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Relative log-likelihood change below which the fit counts as
    /// converged.
    #[serde(default = "default_convergence_tolerance")]
    pub convergence_tolerance: f64,

    /// Optional soft deadline. On expiry the best fit so far is
    /// returned flagged as non-converged — never an error.
    #[serde(default)]
    pub time_budget_secs: Option<u64>,

    /// Dirichlet prior on document–topic mixtures.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Dirichlet prior on topic–term distributions.
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// How many top terms to report per topic.
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,

    /// How many representative documents to report per topic.
    #[serde(default = "default_representative_docs")]
    pub representative_docs: usize,
}

/// Gap extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapConfig {
    /// Case-insensitive regex patterns marking limitation /
    /// future-research framing. Deliberately broad: a false positive
    /// costs a noisy cluster, a false negative loses the signal.
    #[serde(default = "default_gap_patterns")]
    pub patterns: Vec<String>,

    /// Jaccard similarity (over canonical token sets) at or above
    /// which two statements land in the same cluster.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Sentences with fewer words than this are skipped — fragments
    /// match patterns but carry no usable phrasing.
    #[serde(default = "default_min_sentence_words")]
    pub min_sentence_words: usize,
}

/// Keyword co-occurrence network settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// How many top-frequency terms become nodes.
    #[serde(default = "default_network_nodes")]
    pub nodes: usize,

    /// Minimum document co-occurrence count for an edge.
    #[serde(default = "default_network_min_weight")]
    pub min_weight: u32,

    /// Hard cap on reported edges (highest weight first).
    #[serde(default = "default_network_max_edges")]
    pub max_edges: usize,
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self, AnalysisError> {
        let raw = std::fs::read_to_string(path)?;
        let config: AnalysisConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the whole configuration once, up front.
    ///
    /// Returns the first problem found. Nothing downstream re-validates.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        self.normalizer.validate()?;
        self.burst.validate()?;
        self.topics.validate()?;
        self.gaps.validate()?;
        Ok(())
    }
}

impl NormalizerConfig {
    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for pair in &self.canonical_map {
            if pair.variant.is_empty() || pair.canonical.is_empty() {
                return Err(AnalysisError::InvalidConfig(
                    "canonical map entries must have non-empty variant and canonical forms"
                        .to_string(),
                ));
            }
            if let Some(&existing) = seen.get(pair.variant.as_str()) {
                if existing != pair.canonical {
                    return Err(AnalysisError::InvalidConfig(format!(
                        "variant '{}' is mapped to both '{}' and '{}'",
                        pair.variant, existing, pair.canonical
                    )));
                }
            }
            seen.insert(&pair.variant, &pair.canonical);
        }

        // Canonical forms must be fixed points, otherwise applying the
        // map twice diverges from applying it once.
        for pair in &self.canonical_map {
            if let Some(&target) = seen.get(pair.canonical.as_str()) {
                if target != pair.canonical {
                    return Err(AnalysisError::InvalidConfig(format!(
                        "canonical form '{}' is itself remapped to '{}'",
                        pair.canonical, target
                    )));
                }
            }
        }

        for phrase in &self.phrases {
            let words = phrase.split_whitespace().count();
            if !(2..=4).contains(&words) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "phrase '{phrase}' must have 2-4 words, has {words}"
                )));
            }
        }

        if self.min_token_len == 0 {
            return Err(AnalysisError::InvalidConfig(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

}

impl BurstConfig {
    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        if self.window_years == 0 {
            return Err(AnalysisError::InvalidConfig(
                "burst window_years must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl TopicConfig {
    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        if self.num_topics == 0 {
            return Err(AnalysisError::InvalidConfig(
                "num_topics must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(AnalysisError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.convergence_tolerance <= 0.0 {
            return Err(AnalysisError::InvalidConfig(
                "convergence_tolerance must be positive".to_string(),
            ));
        }
        if self.alpha <= 0.0 || self.beta <= 0.0 {
            return Err(AnalysisError::InvalidConfig(
                "dirichlet priors alpha and beta must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl GapConfig {
    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        for pattern in &self.patterns {
            if let Err(e) = regex_lite::Regex::new(&format!("(?i){pattern}")) {
                return Err(AnalysisError::InvalidConfig(format!(
                    "gap pattern '{pattern}' does not compile: {e}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) || self.similarity_threshold == 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "similarity_threshold must be in (0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            academic_stopwords: default_academic_stopwords(),
            canonical_map: default_canonical_pairs(),
            phrases: default_phrases(),
            min_token_len: default_min_token_len(),
            salient_terms: default_salient_terms(),
            salient_pool: default_salient_pool(),
        }
    }
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            window_years: default_burst_window(),
            min_occurrences: default_burst_floor(),
        }
    }
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            num_topics: default_num_topics(),
            seed: default_seed(),
            min_doc_freq: default_min_doc_freq(),
            max_vocabulary: default_max_vocabulary(),
            max_iterations: default_max_iterations(),
            convergence_tolerance: default_convergence_tolerance(),
            time_budget_secs: None,
            alpha: default_alpha(),
            beta: default_beta(),
            top_terms: default_top_terms(),
            representative_docs: default_representative_docs(),
        }
    }
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            patterns: default_gap_patterns(),
            similarity_threshold: default_similarity_threshold(),
            min_sentence_words: default_min_sentence_words(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            nodes: default_network_nodes(),
            min_weight: default_network_min_weight(),
            max_edges: default_network_max_edges(),
        }
    }
}

fn default_min_token_len() -> usize {
    2
}
fn default_salient_terms() -> usize {
    10
}
fn default_salient_pool() -> usize {
    200
}
fn default_burst_window() -> usize {
    2
}
fn default_burst_floor() -> u32 {
    5
}
fn default_num_topics() -> usize {
    8
}
fn default_seed() -> u64 {
    42
}
fn default_min_doc_freq() -> u32 {
    2
}
fn default_max_vocabulary() -> usize {
    2000
}
fn default_max_iterations() -> usize {
    200
}
fn default_convergence_tolerance() -> f64 {
    1e-4
}
fn default_alpha() -> f64 {
    0.1
}
fn default_beta() -> f64 {
    0.01
}
fn default_top_terms() -> usize {
    10
}
fn default_representative_docs() -> usize {
    5
}
fn default_similarity_threshold() -> f64 {
    0.5
}
fn default_min_sentence_words() -> usize {
    4
}
fn default_network_nodes() -> usize {
    40
}
fn default_network_min_weight() -> u32 {
    2
}
fn default_network_max_edges() -> usize {
    200
}

fn default_academic_stopwords() -> Vec<String> {
    [
        "study", "studies", "research", "paper", "article", "results", "findings", "analysis",
        "data", "method", "methods", "approach", "model", "using", "based", "propose", "proposed",
        "show", "shows", "suggest", "suggests", "indicate", "indicates", "examine", "examines",
        "explore", "explores", "investigate", "investigates", "aim", "aims", "objective",
        "purpose", "contribution", "literature", "review", "framework", "theory", "theoretical",
        "empirical", "quantitative", "qualitative", "sample", "samples", "respondent",
        "respondents", "participant", "participants", "significant", "significantly", "effect",
        "effects", "impact", "impacts", "influence", "influences", "relationship",
        "relationships", "factor", "factors", "variable", "variables", "hypothesis", "hypotheses",
        "conclusion", "conclusions", "implication", "implications",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_canonical_pairs() -> Vec<CanonicalPair> {
    [
        // Plural / inflected collapses
        ("tourists", "tourist"),
        ("travelers", "traveler"),
        ("destinations", "destination"),
        ("hotels", "hotel"),
        ("experiences", "experience"),
        ("attractions", "attraction"),
        ("reviews", "review"),
        ("ratings", "rating"),
        ("bookings", "booking"),
        ("technologies", "technology"),
        ("platforms", "platform"),
        // Synonym families collapse to one head term
        ("sustainability", "sustainable"),
        ("eco-tourism", "ecotourism"),
        ("eco tourism", "ecotourism"),
        // Spelled-out forms to their common abbreviation
        ("artificial intelligence", "ai"),
        ("machine learning", "ml"),
        ("virtual reality", "vr"),
        ("augmented reality", "ar"),
        ("internet of things", "iot"),
        ("word of mouth", "wom"),
        ("electronic word of mouth", "ewom"),
        ("user generated content", "ugc"),
        ("online travel agency", "ota"),
        ("large language model", "llm"),
        ("large language models", "llm"),
        ("generative artificial intelligence", "generative ai"),
    ]
    .iter()
    .map(|(v, c)| CanonicalPair {
        variant: v.to_string(),
        canonical: c.to_string(),
    })
    .collect()
}

fn default_phrases() -> Vec<String> {
    [
        "sustainable tourism",
        "smart tourism",
        "dark tourism",
        "sharing economy",
        "social media",
        "service quality",
        "service recovery",
        "big data",
        "generative ai",
        "smart destination",
        "carrying capacity",
        "digital twin",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_gap_patterns() -> Vec<String> {
    [
        r"future (research|studies|study|work|investigations?) (should|could|may|might|will|need)",
        r"(further|additional|more) (research|studies|study|investigation)s? (is|are) (needed|required|recommended|warranted)",
        r"limitations? of (this|the|our) (study|research|paper)",
        r"(this|the|our) (study|research|paper) (is|was) limited",
        r"(this|the|our) (study|research) has (several |some |a few )?limitations?",
        r"remains? (unclear|unexplored|understudied|unknown|an open question)",
        r"little is known about",
        r"(directions?|avenues?|opportunities) for future (research|studies|work)",
        r"warrants? further (research|investigation|study|attention)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
