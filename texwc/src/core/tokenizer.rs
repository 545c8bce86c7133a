// src/core/tokenizer.rs
//! LaTeX to plain-text token extraction.
//!
//! Strategy: staged regex rewriting, not parsing. Each stage strips one
//! class of markup and the stages run in a fixed order — comments first so
//! a `%` inside soon-to-be-removed math cannot truncate a line, math before
//! the generic command pass so `\begin{equation}` is still intact when the
//! math-environment span is matched.
//!
//! LaTeX is Turing-complete; this handles common academic documents and
//! makes no attempt to validate syntax. Malformed input never fails, it
//! just falls through whichever patterns happen to match.

use regex::Regex;
use std::sync::LazyLock;

/// Commands whose entire invocation, brace argument included, is dropped.
/// Their arguments are citation keys, labels and URLs, not prose.
const DROP_COMMANDS: &[&str] = &[
    "cite",
    "citet",
    "citep",
    "citeauthor",
    "citeyear",
    "ref",
    "eqref",
    "pageref",
    "autoref",
    "cref",
    "Cref",
    "label",
    "url",
    "href",
    "footnote",
];

// Rust regex has no lookbehind, so "unescaped %" is expressed by capturing
// the preceding non-backslash character (or line start) and restoring it.
static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[^\\])%.*$").expect("valid comment regex"));

static RE_MATH_ENV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\\begin\{(?:equation|align|align\*|equation\*|gather|gather\*|multline|multline\*)\}.*?\\end\{(?:equation|align|align\*|equation\*|gather|gather\*|multline|multline\*)\}",
    )
    .expect("valid math environment regex")
});
static RE_DISPLAY_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(?:\\.|[^$\\])*\$\$").expect("valid display math regex"));
static RE_INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(?:\\.|[^$\\])*\$").expect("valid inline math regex"));
static RE_PAREN_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\\\((?:\\.|[^\\])*\s*\\\)").expect("valid paren math regex"));
static RE_BRACKET_MATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\\[(?:\\.|[^\\])*\s*\\\]").expect("valid bracket math regex")
});

static RE_DROP_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    let names = DROP_COMMANDS.join("|");
    Regex::new(&format!(
        r"(?s)\\(?:{names})\*?(?:\s*\[[^\]]*\])?\s*\{{[^}}]*\}}"
    ))
    .expect("valid drop-command regex")
});

static RE_BEGIN_END_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:begin|end)\{[^}]+\}").expect("valid begin/end tag regex"));

static RE_COMMAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\[a-zA-Z@]+\*?(?:\s*\[[^\]]*\])?").expect("valid command regex")
});

static RE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)?").expect("valid token regex"));

/// Extracts lowercase word tokens from a LaTeX document string.
///
/// Runs the full cleaning pipeline: comments, math, drop-commands,
/// environment tags, command names, brace/control cleanup, then tokenizes
/// the remaining text into ASCII-letter runs (with optional internal
/// apostrophe, so "don't" stays one token). Total over any input; text
/// with nothing left after cleaning yields an empty vector.
#[must_use]
pub fn extract_tokens(tex: &str) -> Vec<String> {
    let tex = strip_comments(tex);
    let tex = remove_math(&tex);
    let tex = remove_drop_commands(&tex);
    let tex = remove_begin_end_tags(&tex);
    let tex = remove_commands_keep_text(&tex);
    let tex = cleanup_braces_and_controls(&tex);
    tokenize(&tex)
}

/// Deletes everything from an unescaped `%` to end of line. `\%` is a
/// literal percent sign and survives.
fn strip_comments(tex: &str) -> String {
    RE_COMMENT.replace_all(tex, "$1").into_owned()
}

/// Deletes math regions, each replaced by a single space so words on
/// either side of a deleted span do not run together.
fn remove_math(tex: &str) -> String {
    let tex = RE_MATH_ENV.replace_all(tex, " ");
    let tex = RE_DISPLAY_MATH.replace_all(&tex, " ");
    let tex = RE_INLINE_MATH.replace_all(&tex, " ");
    let tex = RE_PAREN_MATH.replace_all(&tex, " ");
    RE_BRACKET_MATH.replace_all(&tex, " ").into_owned()
}

fn remove_drop_commands(tex: &str) -> String {
    RE_DROP_COMMAND.replace_all(tex, " ").into_owned()
}

/// Strips remaining `\begin{...}`/`\end{...}` tags for any environment
/// name, leaving the environment's content in place.
fn remove_begin_end_tags(tex: &str) -> String {
    RE_BEGIN_END_TAG.replace_all(tex, " ").into_owned()
}

/// Removes LaTeX command names while keeping any following brace content.
///
/// `\textbf{Hello}` -> `{Hello}`, `\LaTeX` -> removed entirely.
fn remove_commands_keep_text(tex: &str) -> String {
    RE_COMMAND.replace_all(tex, " ").into_owned()
}

fn cleanup_braces_and_controls(tex: &str) -> String {
    tex.chars()
        .map(|c| match c {
            '{' | '}' | '~' | '\\' => ' ',
            other => other,
        })
        .collect()
}

fn tokenize(tex: &str) -> Vec<String> {
    RE_TOKEN
        .find_iter(tex)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}
