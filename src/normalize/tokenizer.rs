// Raw word tokenization.
//
// Splits text into lowercase word tokens. A token starts with a letter
// and may continue with letters, digits, hyphens, or apostrophes —
// "eco-tourism" stays one token, "2023" never becomes one. Stopword and
// length filtering happen later in the Normalizer, after
// canonicalization, so that a variant collapsing onto a stopword is
// still removed.

/// Split text into raw lowercase word tokens, stopwords included.
pub fn raw_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        let lower = ch.to_ascii_lowercase();
        let continues = lower.is_ascii_alphanumeric() || lower == '-' || lower == '\'';
        if continues && (!current.is_empty() || lower.is_ascii_alphabetic()) {
            current.push(lower);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    // Trim stray leading/trailing hyphens and apostrophes left by
    // punctuation like "co--" or quoted words.
    tokens
        .into_iter()
        .map(|t| t.trim_matches(|c| c == '-' || c == '\'').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_punctuation() {
        let tokens = raw_tokens("Smart tourism, in 2024: a (critical) review.");
        assert_eq!(
            tokens,
            vec!["smart", "tourism", "in", "a", "critical", "review"]
        );
    }

    #[test]
    fn numbers_do_not_start_tokens() {
        let tokens = raw_tokens("2023 was covid-19's third year");
        assert_eq!(tokens, vec!["was", "covid-19's", "third", "year"]);
    }

    #[test]
    fn hyphenated_words_stay_whole() {
        assert_eq!(raw_tokens("eco-tourism"), vec!["eco-tourism"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(raw_tokens("").is_empty());
        assert!(raw_tokens("  \t\n").is_empty());
    }

    #[test]
    fn stray_hyphens_are_trimmed() {
        assert_eq!(raw_tokens("well- known"), vec!["well", "known"]);
    }
}
