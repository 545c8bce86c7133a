// src/models.rs

/// Result of token counting and ranking for one run.
///
/// `top_words` is count-descending with first-seen tie break; `tokens` is
/// the full extracted sequence in document order, kept for the raw token
/// dump output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountResult {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_words: Vec<(String, usize)>,
    pub tokens: Vec<String>,
}
