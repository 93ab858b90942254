// Gap sentence extraction — pattern filtering over split sentences.
//
// The pattern list is configuration data, not embedded logic, so recall
// and precision can be tuned without touching this module. The filter
// is recall-oriented: patterns are broad, and a noisy match costs far
// less than a missed limitation statement.

use rayon::prelude::*;
use regex_lite::Regex;

use crate::config::GapConfig;
use crate::corpus::Document;
use crate::error::AnalysisError;

use super::GapStatement;

/// Compiled limitation/future-research patterns.
pub struct GapMatcher {
    regexes: Vec<Regex>,
}

impl GapMatcher {
    /// Compile the configured pattern list, case-insensitive.
    pub fn new(config: &GapConfig) -> Result<Self, AnalysisError> {
        let regexes = config
            .patterns
            .iter()
            .map(|p| {
                Regex::new(&format!("(?i){p}")).map_err(|e| {
                    AnalysisError::InvalidConfig(format!(
                        "gap pattern '{p}' does not compile: {e}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    /// Does this sentence carry limitation/future-research framing?
    pub fn matches(&self, sentence: &str) -> bool {
        self.regexes.iter().any(|r| r.is_match(sentence))
    }
}

/// Split text into sentences on `.`, `!`, `?` followed by whitespace.
///
/// Deliberately simple: abbreviation handling would add precision the
/// downstream pattern filter does not need.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let at_end = chars.peek().is_none();
            let before_space = chars.peek().is_some_and(|c| c.is_whitespace());
            if at_end || before_space {
                let trimmed = current.trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                current.clear();
            }
        }
    }
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    sentences
}

/// Extract gap statements from every document's abstract, in parallel.
/// Statement ids are assigned in (document, sentence) order, so the
/// output is deterministic regardless of scheduling.
pub fn extract_statements(
    docs: &[Document],
    matcher: &GapMatcher,
    config: &GapConfig,
) -> Vec<GapStatement> {
    let per_doc: Vec<Vec<(String, String, Option<i32>)>> = docs
        .par_iter()
        .map(|doc| {
            split_sentences(&doc.abstract_text)
                .into_iter()
                .filter(|s| s.split_whitespace().count() >= config.min_sentence_words)
                .filter(|s| matcher.matches(s))
                .map(|s| (s, doc.id.clone(), doc.year))
                .collect()
        })
        .collect();

    per_doc
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(id, (text, doc_id, year))| GapStatement {
            id,
            text,
            doc_id,
            year,
            cluster: 0,
        })
        .collect()
}
