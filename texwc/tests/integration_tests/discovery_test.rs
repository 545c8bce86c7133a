// tests/integration_tests/discovery_test.rs
use super::common::{create_test_file, setup_tex_directory};
use anyhow::Result;
use texwc::{DEFAULT_EXCLUDE_DIRS, discover_tex_files};

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .collect()
}

#[test]
fn test_discovery_finds_tex_files_case_insensitively() -> Result<()> {
    let temp_dir = setup_tex_directory()?;

    let files = discover_tex_files(temp_dir.path(), DEFAULT_EXCLUDE_DIRS)?;
    let names = file_names(&files);

    assert!(names.contains(&String::from("main.tex")));
    assert!(names.contains(&String::from("intro.tex")));
    assert!(names.contains(&String::from("methods.TEX")));
    assert!(!names.contains(&String::from("notes.md")));
    assert!(!names.contains(&String::from("references.bib")));
    Ok(())
}

#[test]
fn test_discovery_prunes_hidden_and_excluded_directories() -> Result<()> {
    let temp_dir = setup_tex_directory()?;

    let files = discover_tex_files(temp_dir.path(), DEFAULT_EXCLUDE_DIRS)?;
    let names = file_names(&files);

    assert!(!names.contains(&String::from("secret.tex")), "hidden dir must be pruned");
    assert!(!names.contains(&String::from("out.tex")), "build dir must be pruned");
    Ok(())
}

#[test]
fn test_discovery_returns_sorted_paths() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "c.tex", "c")?;
    create_test_file(temp_dir.path(), "a.tex", "a")?;
    create_test_file(temp_dir.path(), "b/nested.tex", "b")?;

    let files = discover_tex_files(temp_dir.path(), DEFAULT_EXCLUDE_DIRS)?;
    let mut sorted = files.clone();
    sorted.sort();

    assert_eq!(files, sorted, "results must already be in sorted order");
    assert_eq!(files.len(), 3);
    Ok(())
}

#[test]
fn test_exclude_override_accepts_glob_patterns() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "keep.tex", "keep")?;
    create_test_file(temp_dir.path(), "draft-v1/a.tex", "drop")?;
    create_test_file(temp_dir.path(), "draft-v2/b.tex", "drop")?;

    let files = discover_tex_files(temp_dir.path(), &["draft-*"])?;
    let names = file_names(&files);

    assert_eq!(names, vec![String::from("keep.tex")]);
    Ok(())
}

#[test]
fn test_overriding_excludes_admits_default_excluded_dirs() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "main.tex", "main")?;
    create_test_file(temp_dir.path(), "build/out.tex", "generated")?;

    // An explicit empty-ish override replaces the defaults entirely.
    let files = discover_tex_files(temp_dir.path(), &[".git"])?;

    assert_eq!(files.len(), 2);
    Ok(())
}

#[test]
fn test_discovery_root_must_be_a_directory() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "doc.tex", "text")?;

    let result = discover_tex_files(&temp_dir.path().join("doc.tex"), DEFAULT_EXCLUDE_DIRS);
    assert!(result.is_err());
    Ok(())
}
