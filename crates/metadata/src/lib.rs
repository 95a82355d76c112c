//! Document metadata sanitization.
//!
//! Reads the handful of info-dictionary entries worth indexing (title,
//! keywords, subject) and cleans them: trimmed, with blank values treated as
//! absent. Missing metadata is normal and never an error.
//!
//! ## Example
//!
//! ```rust
//! use metadata::{sanitize_document_info, RawMetadata};
//!
//! let mut raw = RawMetadata::new();
//! raw.insert("Title", "  Hello World  ");
//! raw.insert("Keywords", "");
//!
//! let clean = sanitize_document_info(&raw);
//! assert_eq!(clean.title(), Some("Hello World"));
//! assert_eq!(clean.keywords(), None);
//! assert_eq!(clean.subject(), None);
//! ```

pub mod keys;
mod sanitize;
mod types;

pub use crate::keys::{DOCUMENT_INFO_KEYS, KEYWORDS, SUBJECT, TITLE};
pub use crate::sanitize::{sanitize, sanitize_document_info, sanitize_value};
pub use crate::types::{CleanMetadata, RawMetadata};
