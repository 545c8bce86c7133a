// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::counter::build_result;
use crate::core::discovery::{DEFAULT_EXCLUDE_DIRS, discover_tex_files, has_tex_extension};
use crate::core::tokenizer::extract_tokens;
use crate::models::WordCountResult;
use crate::utils::{print_report, read_text_best_effort};
use crate::writers::{TOP_WORDS_CSV_FILE, WORDS_TXT_FILE, write_top_words_csv, write_words_txt};

/// Environment variable giving the default document path.
pub const DOCUMENT_PATH_ENV: &str = "DOCUMENT_PATH";
/// Environment variable giving the default output directory.
pub const OUT_DIR_ENV: &str = "LOG_DIR";

#[derive(Parser, Debug)]
#[command(author, version, about = "Count words in LaTeX .tex file(s), ignoring LaTeX commands/keywords.", long_about = None)]
pub struct Args {
    /// Path to a .tex file or a directory to search (defaults to
    /// $DOCUMENT_PATH, then the current directory)
    pub path: Option<PathBuf>,

    /// Path to a LaTeX .tex file (overridden by PATH if given)
    #[arg(long)]
    pub document_path: Option<PathBuf>,

    /// Show top N most frequent words
    #[arg(short = 't', long, default_value_t = 100)]
    pub top: usize,

    /// Minimum token length to include
    #[arg(long, default_value_t = 1)]
    pub min_len: usize,

    /// Output directory for words.txt and top_words.csv (defaults to
    /// $LOG_DIR; if unset, no files are written)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Directories to exclude in directory mode (comma-separated glob
    /// patterns)
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Enable verbose debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Runs the word count end to end: resolve input, discover files, extract
/// and filter tokens, count, report, and optionally write artifacts.
///
/// # Errors
///
/// This function may return an error if:
/// * `--top` or `--min-len` is zero
/// * The input path does not exist, or a file input is not a `.tex` file
/// * A directory input contains no `.tex` files
/// * No tokens could be extracted from any readable input
/// * The output files cannot be written
pub fn run(args: Args) -> Result<()> {
    validate_args(&args)?;

    let input_path = resolve_input_path(args.path.as_deref(), args.document_path.as_deref())?;
    info!("input: {}", input_path.display());

    let exclude = args.exclude.as_deref();
    let tex_files = resolve_tex_files(&input_path, exclude)?;
    info!("tex files: {}", tex_files.len());

    let tokens = collect_tokens(&tex_files, args.min_len);
    if tokens.is_empty() {
        bail!("no tokens extracted (no readable .tex files found?)");
    }
    info!("total tokens (combined): {}", tokens.len());

    let result = build_result(tokens, args.top)?;
    print_report(&input_path, tex_files.len(), args.top, &result);

    if let Some(out_dir) = resolve_out_dir(args.out_dir.as_deref()) {
        let out_dir = absolutize(&out_dir)?;
        write_artifacts(&out_dir, &result)?;
    }

    Ok(())
}

fn validate_args(args: &Args) -> Result<()> {
    if args.top == 0 {
        bail!("--top must be > 0");
    }
    if args.min_len == 0 {
        bail!("--min-len must be > 0");
    }
    Ok(())
}

/// Precedence: positional PATH, then `--document-path`, then
/// `$DOCUMENT_PATH`, then the current directory.
fn resolve_input_path(positional: Option<&Path>, document_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = positional {
        return absolutize(path);
    }
    if let Some(path) = document_path {
        return absolutize(path);
    }
    if let Ok(env_doc) = env::var(DOCUMENT_PATH_ENV) {
        if !env_doc.is_empty() {
            return absolutize(Path::new(&env_doc));
        }
    }
    env::current_dir().context("failed to resolve current directory")
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()
            .context("failed to resolve current directory")?
            .join(path))
    }
}

/// A file input must itself be a `.tex` file; a directory input is
/// searched recursively.
fn resolve_tex_files(input_path: &Path, exclude: Option<&str>) -> Result<Vec<PathBuf>> {
    if !input_path.exists() {
        bail!("path not found: {}", input_path.display());
    }

    if input_path.is_file() {
        if !has_tex_extension(input_path) {
            let name = input_path
                .file_name()
                .map_or_else(|| input_path.display().to_string(), |n| n.to_string_lossy().into_owned());
            bail!("expected a .tex file, got: {name}");
        }
        debug!("single file mode: {}", input_path.display());
        return Ok(vec![input_path.to_path_buf()]);
    }

    debug!("directory mode discovery: {}", input_path.display());
    let exclude_dirs: Vec<&str> = exclude.map_or_else(
        || DEFAULT_EXCLUDE_DIRS.to_vec(),
        |spec| spec.split(',').collect(),
    );
    let files = discover_tex_files(input_path, &exclude_dirs)?;
    if files.is_empty() {
        bail!("no .tex files found under: {}", input_path.display());
    }
    Ok(files)
}

/// Reads and tokenizes every file, applying the minimum-length filter.
/// A file that cannot be read is skipped with a warning; aggregation
/// continues with the remaining files.
fn collect_tokens(tex_files: &[PathBuf], min_len: usize) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for path in tex_files {
        let tex = match read_text_best_effort(path) {
            Ok(tex) => tex,
            Err(err) => {
                warn!("failed to read {}: {err:#}", path.display());
                eprintln!("Warning: failed to read {}: {err:#}", path.display());
                continue;
            }
        };

        let mut file_tokens = extract_tokens(&tex);
        debug!("extracted {} raw tokens from {}", file_tokens.len(), path.display());

        if min_len > 1 {
            let before = file_tokens.len();
            file_tokens.retain(|t| t.len() >= min_len);
            debug!(
                "applied min-len={min_len} to {}: {before} -> {} tokens",
                path.display(),
                file_tokens.len()
            );
        }

        tokens.extend(file_tokens);
    }

    tokens
}

/// Flag wins over `$LOG_DIR`; an empty value disables artifact output.
fn resolve_out_dir(flag: Option<&Path>) -> Option<PathBuf> {
    match flag {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir.to_path_buf()),
        Some(_) => None,
        None => match env::var(OUT_DIR_ENV) {
            Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
            _ => None,
        },
    }
}

fn write_artifacts(out_dir: &Path, result: &WordCountResult) -> Result<()> {
    info!("writing outputs to: {}", out_dir.display());
    let words_path = out_dir.join(WORDS_TXT_FILE);
    let top_csv_path = out_dir.join(TOP_WORDS_CSV_FILE);

    write_words_txt(&result.tokens, &words_path).context("failed writing outputs")?;
    write_top_words_csv(&result.top_words, &top_csv_path).context("failed writing outputs")?;

    println!();
    println!("Wrote: {}", words_path.display());
    println!("Wrote: {}", top_csv_path.display());
    Ok(())
}
