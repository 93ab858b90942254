// Controlled-phrase detection over token windows.
//
// A matched phrase is emitted as one compound token in addition to (not
// instead of) its constituent tokens, so both granularities reach the
// statistics and topic stages. The phrase list is configuration data;
// 2–4 word entries are enforced at config validation.

/// Matches a controlled phrase list against raw token streams.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    /// Phrase word sequences, longest first.
    phrases: Vec<Vec<String>>,
}

impl PhraseMatcher {
    pub fn new(phrases: &[String]) -> Self {
        let mut split: Vec<Vec<String>> = phrases
            .iter()
            .map(|p| p.to_lowercase().split_whitespace().map(str::to_string).collect())
            .collect();
        split.sort_by(|a, b| b.len().cmp(&a.len()));
        Self { phrases: split }
    }

    /// All phrase matches in the stream, joined with single spaces, in
    /// order of appearance. Matches do not overlap; at a shared start
    /// position the longest phrase wins.
    pub fn find(&self, tokens: &[String]) -> Vec<String> {
        let mut found = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let mut matched_len = 0;
            for words in &self.phrases {
                if tokens.len() - i >= words.len()
                    && tokens[i..i + words.len()].iter().zip(words).all(|(a, b)| a == b)
                {
                    found.push(words.join(" "));
                    matched_len = words.len();
                    break;
                }
            }
            i += matched_len.max(1);
        }
        found
    }
}
