// src/writers.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// File name of the raw token dump.
pub const WORDS_TXT_FILE: &str = "words.txt";
/// File name of the ranked CSV output.
pub const TOP_WORDS_CSV_FILE: &str = "top_words.csv";

/// Writes one raw token per line, in extraction order, with a trailing
/// newline. Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be created
/// or written.
pub fn write_words_txt(tokens: &[String], out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;
    let mut content = tokens.join("\n");
    content.push('\n');
    fs::write(out_path, content).with_context(|| format!("failed to write {}", out_path.display()))
}

/// Writes the ranked list as CSV with a `rank,word,count` header. Rank is
/// 1-based and follows the ranked order.
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be created
/// or written.
pub fn write_top_words_csv(top_words: &[(String, usize)], out_path: &Path) -> Result<()> {
    ensure_parent_dir(out_path)?;
    let mut writer = csv::Writer::from_path(out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;

    writer
        .write_record(["rank", "word", "count"])
        .context("failed to write CSV header")?;
    for (idx, (word, count)) in top_words.iter().enumerate() {
        let rank = idx.saturating_add(1);
        writer
            .write_record([rank.to_string(), word.clone(), count.to_string()])
            .with_context(|| format!("failed to write CSV row {rank}"))?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush {}", out_path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    Ok(())
}
