// tests/integration_tests/writers_test.rs
use anyhow::Result;
use std::fs;
use texwc::writers::{write_top_words_csv, write_words_txt};

#[test]
fn test_words_txt_round_trip() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let out_path = temp_dir.path().join("words.txt");
    let tokens: Vec<String> = ["the", "cat", "the", "mat"]
        .iter()
        .map(|w| (*w).to_owned())
        .collect();

    write_words_txt(&tokens, &out_path)?;

    let read_back: Vec<String> = fs::read_to_string(&out_path)?
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(read_back, tokens);
    Ok(())
}

#[test]
fn test_words_txt_creates_parent_directories() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let out_path = temp_dir.path().join("nested/deep/words.txt");

    write_words_txt(&[String::from("word")], &out_path)?;

    assert!(out_path.exists());
    Ok(())
}

#[test]
fn test_top_words_csv_header_and_ranks() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let out_path = temp_dir.path().join("top_words.csv");
    let top_words = vec![(String::from("cat"), 3), (String::from("mat"), 1)];

    write_top_words_csv(&top_words, &out_path)?;

    let mut reader = csv::Reader::from_path(&out_path)?;
    assert_eq!(
        reader.headers()?,
        &csv::StringRecord::from(vec!["rank", "word", "count"])
    );
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0], &csv::StringRecord::from(vec!["1", "cat", "3"]));
    assert_eq!(&rows[1], &csv::StringRecord::from(vec!["2", "mat", "1"]));
    Ok(())
}

#[test]
fn test_empty_ranked_list_still_writes_header() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let out_path = temp_dir.path().join("top_words.csv");

    write_top_words_csv(&[], &out_path)?;

    let content = fs::read_to_string(&out_path)?;
    assert!(content.starts_with("rank,word,count"));
    Ok(())
}
