//! Configuration for text normalization.
//!
//! This module defines [`NormalizeConfig`], which sets how many characters
//! a normalization run may emit before it stops at the next word boundary.
//!
//! # Examples
//!
//! ```rust
//! use normalize::{NormalizeConfig, DEFAULT_TEXT_CUTOFF_LENGTH};
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.text_cutoff_length, DEFAULT_TEXT_CUTOFF_LENGTH);
//!
//! let small = NormalizeConfig::with_cutoff(1_000);
//! assert_eq!(small.text_cutoff_length, 1_000);
//! ```

use serde::{Deserialize, Serialize};

/// Default soft limit, in normalized characters, for indexed document content.
pub const DEFAULT_TEXT_CUTOFF_LENGTH: usize = 64_000;

/// Configuration for [`normalize_with_config`](crate::normalize_with_config).
///
/// # Serialization
///
/// ```json
/// { "text_cutoff_length": 64000 }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Soft upper bound on the number of normalized characters.
    ///
    /// Once the running count exceeds this value, normalization stops at the
    /// next delimiter. A word in progress is always finished, so the output
    /// can run past the limit by the length of that word.
    ///
    /// Default: [`DEFAULT_TEXT_CUTOFF_LENGTH`]
    pub text_cutoff_length: usize,
}

impl NormalizeConfig {
    /// Creates a configuration with the given cutoff.
    pub fn with_cutoff(text_cutoff_length: usize) -> Self {
        Self { text_cutoff_length }
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            text_cutoff_length: DEFAULT_TEXT_CUTOFF_LENGTH,
        }
    }
}
