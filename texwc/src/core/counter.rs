// src/core/counter.rs
use crate::models::WordCountResult;
use anyhow::{Result, ensure};
use std::collections::HashMap;

/// Counts total words, unique words, and the top-N frequencies.
///
/// Ranking is by count descending; ties keep first-seen order, so a word
/// that appeared earlier in the token sequence outranks a later word with
/// the same count. If `top_n` exceeds the number of distinct tokens, every
/// distinct token is returned.
///
/// # Arguments
///
/// * `tokens` - Normalized (lowercase) tokens in extraction order
/// * `top_n` - Number of top words to return (must be > 0)
///
/// # Errors
///
/// Returns an error if `top_n` is zero. The CLI validates this before any
/// file I/O; the guard stays so the function is safe to reuse directly.
pub fn count_words(tokens: &[String], top_n: usize) -> Result<(usize, usize, Vec<(String, usize)>)> {
    ensure!(top_n > 0, "top must be > 0");

    // Entries stay in first-seen order; the stable sort below only reorders
    // by count, which is what gives equal counts their insertion-order tie
    // break.
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        let slot = *first_seen.entry(token.as_str()).or_insert_with(|| {
            entries.push((token.clone(), 0));
            entries.len().saturating_sub(1)
        });
        if let Some(entry) = entries.get_mut(slot) {
            entry.1 = entry.1.saturating_add(1);
        }
    }

    let total = tokens.len();
    let unique = entries.len();

    let mut ranked = entries;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    Ok((total, unique, ranked))
}

/// Convenience wrapper that bundles the counts and the raw token sequence
/// into a [`WordCountResult`].
///
/// # Errors
///
/// Returns an error if `top_n` is zero.
pub fn build_result(tokens: Vec<String>, top_n: usize) -> Result<WordCountResult> {
    let (total_words, unique_words, top_words) = count_words(&tokens, top_n)?;
    Ok(WordCountResult {
        total_words,
        unique_words,
        top_words,
        tokens,
    })
}
