//! Error types produced while extracting content from media.
//!
//! Extraction failures never reach the host as hard errors: the registry logs
//! them and reports "no result". The typed errors exist so callers that drive
//! an extractor directly, and tests, can tell the cases apart.

use thiserror::Error;

/// Failure raised by a [`DocumentReader`](crate::DocumentReader) or
/// [`DocumentOpener`](crate::DocumentOpener).
///
/// Messages are captured as strings so the error stays `Clone` and comparable
/// regardless of the reader backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReaderError {
    /// The media stream could not be opened or read.
    #[error("failed to read media stream: {0}")]
    Stream(String),

    /// The bytes were read but do not form a readable document.
    #[error("document could not be parsed: {0}")]
    Malformed(String),

    /// Text of a single page could not be produced.
    #[error("text of page {page} could not be extracted: {message}")]
    Page { page: u32, message: String },

    /// The document info dictionary exists but could not be read.
    #[error("document metadata could not be read: {0}")]
    Metadata(String),
}

impl From<std::io::Error> for ReaderError {
    fn from(err: std::io::Error) -> Self {
        ReaderError::Stream(err.to_string())
    }
}

/// Errors returned by [`ContentExtractor::try_extract`](crate::ContentExtractor::try_extract).
///
/// ```rust
/// use mediaindex::{ExtractError, ReaderError};
///
/// let err = ExtractError::ReaderAcquisition {
///     path: "/media/report".to_string(),
///     source: ReaderError::Malformed("missing xref".to_string()),
/// };
/// assert_eq!(
///     err.to_string(),
///     "unable to load document data from /media/report: document could not be parsed: missing xref"
/// );
/// assert!(!err.is_unsupported_media());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// No extractor handles this media. A skip, not a failure.
    #[error("unsupported media (extension {extension:?}, mime type {mime_type:?})")]
    UnsupportedMedia {
        extension: String,
        mime_type: String,
    },

    /// The item was eligible but its stream or reader could not be used.
    #[error("unable to load document data from {path}: {source}")]
    ReaderAcquisition {
        path: String,
        #[source]
        source: ReaderError,
    },
}

impl ExtractError {
    pub fn is_unsupported_media(&self) -> bool {
        matches!(self, ExtractError::UnsupportedMedia { .. })
    }
}
