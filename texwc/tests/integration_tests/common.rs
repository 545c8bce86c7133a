// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Builds a directory tree with `.tex` files at several depths, plus the
/// kinds of clutter discovery must skip: other extensions, hidden
/// directories, and default-excluded build directories.
pub fn setup_tex_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "main.tex", "Main document text")?;
    create_test_file(temp_dir.path(), "chapters/intro.tex", "Introduction words")?;
    create_test_file(temp_dir.path(), "chapters/methods.TEX", "Methods words")?;
    create_test_file(temp_dir.path(), "notes.md", "not latex")?;
    create_test_file(temp_dir.path(), "references.bib", "@article{key}")?;
    create_test_file(temp_dir.path(), ".hidden/secret.tex", "hidden words")?;
    create_test_file(temp_dir.path(), "build/out.tex", "generated words")?;

    Ok(temp_dir)
}
