//! Count prose words in LaTeX documents, ignoring markup.
//!
//! The tokenizer strips comments, math, citation-style commands,
//! environment tags and command names before extracting lowercase word
//! tokens; the counter ranks them with a first-seen tie break.

pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;
pub mod writers;

pub use crate::cli::{Args, run};
pub use crate::core::counter::{build_result, count_words};
pub use crate::core::discovery::{DEFAULT_EXCLUDE_DIRS, discover_tex_files};
pub use crate::core::tokenizer::extract_tokens;
pub use crate::models::WordCountResult;
