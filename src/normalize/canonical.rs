// Canonicalization map — variant → canonical term rewriting.
//
// The map is configuration data, validated once at load time (see
// NormalizerConfig::validate). Single-word variants are rewritten by
// direct lookup; multi-word variants ("artificial intelligence" → "ai")
// are found by scanning token windows, since they no longer exist as
// single tokens after splitting.

use std::collections::HashMap;

use crate::config::NormalizerConfig;
use crate::error::AnalysisError;

/// Compiled canonicalization table.
#[derive(Debug, Clone)]
pub struct CanonicalMap {
    /// Every variant (single- or multi-word, keyed by its full surface
    /// form) → canonical form.
    by_variant: HashMap<String, String>,
    /// Multi-word variants split into token windows, longest first.
    multis: Vec<(Vec<String>, String)>,
}

impl CanonicalMap {
    /// Build the table from validated configuration.
    pub fn from_config(config: &NormalizerConfig) -> Result<Self, AnalysisError> {
        config.validate()?;

        let mut by_variant = HashMap::new();
        let mut multis = Vec::new();

        for pair in &config.canonical_map {
            let variant = pair.variant.to_lowercase();
            let canonical = pair.canonical.to_lowercase();
            let words: Vec<String> = variant.split_whitespace().map(str::to_string).collect();
            if words.len() > 1 {
                multis.push((words, canonical.clone()));
            }
            by_variant.insert(variant, canonical);
        }

        // Longest window first, so "electronic word of mouth" wins over
        // "word of mouth" at the same position.
        multis.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Ok(Self { by_variant, multis })
    }

    /// Canonical form of a term (single token or full surface string).
    /// Unmapped terms are already canonical.
    pub fn canonical<'a>(&'a self, term: &'a str) -> &'a str {
        self.by_variant.get(term).map(String::as_str).unwrap_or(term)
    }

    /// Scan a raw token stream for multi-word variants; returns the
    /// canonical forms in order of appearance.
    pub fn match_multiword(&self, tokens: &[String]) -> Vec<String> {
        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let mut matched_len = 0;
            for (words, canonical) in &self.multis {
                if tokens.len() - i >= words.len()
                    && tokens[i..i + words.len()].iter().zip(words).all(|(a, b)| a == b)
                {
                    found.push(canonical.clone());
                    matched_len = words.len();
                    break;
                }
            }
            i += matched_len.max(1);
        }
        found
    }
}
