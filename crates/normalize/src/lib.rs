//! Indexable text normalization.
//!
//! This crate turns raw page text extracted from a document into a compact,
//! script-agnostic string for full-text indexing, and bounds the work spent on
//! very large documents with a soft character cutoff.
//!
//! ## What we do
//!
//! - Keep letters and digits of every supported script (Latin, Greek,
//!   Cyrillic, Hebrew, Arabic, CJK, ...) via a fixed code-point table
//! - Drop punctuation, symbols and control characters
//! - Collapse each delimiter run between two words into one space
//! - Emit one line per source line that had any content
//! - Stop at the first delimiter after the running count exceeds the cutoff,
//!   so words are never split
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. The same pages and cutoff give the same output
//! on any machine. Nothing is shared between runs: each run owns its
//! [`NormalizationState`].
//!
//! ## Example
//!
//! ```rust
//! use normalize::{normalize, NormalizationState, PageOutcome};
//!
//! let out = normalize(["Héllo, wörld!\n", "日本語 テスト"], 1_000);
//! assert_eq!(out.content, "Héllo wörld\n日本語 テスト\n");
//!
//! // The same fold, driven page by page.
//! let mut state = NormalizationState::new();
//! assert_eq!(state.push_page("Héllo, wörld!\n", 1_000), PageOutcome::Continue);
//! assert_eq!(state.push_page("日本語 テスト", 1_000), PageOutcome::Continue);
//! assert_eq!(state.finish(), out);
//! ```

mod classify;
mod config;
mod lines;
mod page;
mod pipeline;
mod state;

pub use crate::classify::{is_content_char, is_delimiter};
pub use crate::config::{NormalizeConfig, DEFAULT_TEXT_CUTOFF_LENGTH};
pub use crate::lines::{lines, Lines};
pub use crate::page::RawPage;
pub use crate::pipeline::{normalize, normalize_with_config};
pub use crate::state::{NormalizationState, NormalizedText, PageOutcome};
