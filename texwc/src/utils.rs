// src/utils.rs
use crate::models::WordCountResult;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Reads a file's full contents, attempting UTF-8 first and falling back
/// to Latin-1 so older or mixed-encoding documents do not abort the run.
///
/// # Errors
///
/// Returns an error if the file cannot be read at all (not found,
/// permission denied). Decode failures never error; they take the
/// fallback.
pub fn read_text_best_effort(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(encoding_rs::mem::decode_latin1(err.as_bytes()).into_owned()),
    }
}

/// Prints the human-readable report to stdout: input identity, totals,
/// and the ranked list with the word right-aligned in a 20-column field.
pub fn print_report(input_path: &Path, file_count: usize, top_n: usize, result: &WordCountResult) {
    if input_path.is_dir() {
        println!("Directory: {}", input_path.display());
        println!("Files: {file_count}");
    } else {
        println!("Document: {}", input_path.display());
    }
    println!("Total words: {}", result.total_words);
    println!("Unique words: {}", result.unique_words);
    println!();
    println!("Top {top_n} words:");
    for (word, count) in &result.top_words {
        println!("{word:>20}  {count}");
    }
}
