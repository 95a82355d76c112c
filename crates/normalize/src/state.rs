//! The accumulator behind a normalization run.
//!
//! [`NormalizationState`] owns the output buffer, the running character count
//! and the truncation flag for exactly one run. Pages are folded into it one at
//! a time with [`NormalizationState::push_page`]; the cumulative cutoff is
//! therefore enforced across page boundaries, and the caller decides whether to
//! fetch another page by looking at the returned [`PageOutcome`].
//!
//! # Output format
//!
//! - Content-bearing characters are copied as-is.
//! - A run of delimiters between two content characters on the same line
//!   becomes a single `' '`.
//! - Every line that produced content ends with `'\n'`.
//! - Lines without content produce nothing at all.
//!
//! Only content characters and collapse spaces count towards the cutoff; line
//! breaks do not.
//!
//! # Stopping
//!
//! [`NormalizationState::push_page`] stops at the first delimiter seen while
//! the count is above the cutoff. A document reader driving pages itself
//! additionally calls [`NormalizationState::end_page`] between pages, which
//! stops once the count has reached the cutoff.

use serde::{Deserialize, Serialize};

use crate::classify::is_content_char;
use crate::lines::lines;

/// Tells the caller whether it may feed another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was consumed completely; the next page may follow.
    Continue,
    /// The cutoff was reached at a delimiter; no further page is read.
    CutoffReached,
}

impl PageOutcome {
    /// Returns `true` for [`PageOutcome::CutoffReached`].
    pub fn is_cutoff(self) -> bool {
        matches!(self, PageOutcome::CutoffReached)
    }
}

/// Final output of a normalization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// Normalized, newline-separated content.
    pub content: String,
    /// Content characters plus collapse spaces written to `content`.
    pub char_count: usize,
    /// Whether the cutoff stopped the run before the input was exhausted.
    pub truncated: bool,
}

/// Mutable accumulator exclusively owned by one normalization run.
#[derive(Debug, Default)]
pub struct NormalizationState {
    content: String,
    char_count: usize,
    truncated: bool,
}

impl NormalizationState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized content accumulated so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Characters counted towards the cutoff so far.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Whether a previous page hit the cutoff.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Folds one page of raw text into the state.
    ///
    /// Scanning stops the moment a delimiter is seen while the running count
    /// is above `cutoff`; the rest of the line and the page are discarded.
    /// Once the state is truncated, further pages are ignored.
    pub fn push_page(&mut self, text: &str, cutoff: usize) -> PageOutcome {
        if self.truncated {
            return PageOutcome::CutoffReached;
        }
        for line in lines(text) {
            if self.push_line(line, cutoff).is_cutoff() {
                self.truncated = true;
                return PageOutcome::CutoffReached;
            }
        }
        PageOutcome::Continue
    }

    /// Applies the page-boundary stop after a page returned
    /// [`PageOutcome::Continue`].
    ///
    /// When `more_pages` follow and the count is already at or past `cutoff`,
    /// the run is marked truncated and [`PageOutcome::CutoffReached`] is
    /// returned so the caller never requests the next page. After the last
    /// page nothing is left unread, so the state is left untouched.
    pub fn end_page(&mut self, cutoff: usize, more_pages: bool) -> PageOutcome {
        if self.truncated {
            return PageOutcome::CutoffReached;
        }
        if more_pages && self.char_count >= cutoff {
            self.truncated = true;
            return PageOutcome::CutoffReached;
        }
        PageOutcome::Continue
    }

    fn push_line(&mut self, line: &str, cutoff: usize) -> PageOutcome {
        let mut has_line_content = false;
        let mut whitespace_pending = false;

        for c in line.chars() {
            if is_content_char(c) {
                if whitespace_pending && has_line_content {
                    self.content.push(' ');
                    self.char_count += 1;
                }
                whitespace_pending = false;
                self.content.push(c);
                self.char_count += 1;
                has_line_content = true;
            } else {
                whitespace_pending = true;
            }

            // The count only grows on content, so checking at delimiters keeps
            // words whole.
            if whitespace_pending && self.char_count > cutoff {
                return PageOutcome::CutoffReached;
            }
        }

        if has_line_content {
            self.content.push('\n');
        }
        PageOutcome::Continue
    }

    /// Consumes the state and returns the accumulated output.
    pub fn finish(self) -> NormalizedText {
        NormalizedText {
            content: self.content,
            char_count: self.char_count,
            truncated: self.truncated,
        }
    }
}
