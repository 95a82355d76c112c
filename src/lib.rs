//! Full-text content and metadata extraction for a media library.
//!
//! When a PDF is uploaded or attached, its page text is normalized into a
//! compact indexable form (content runs joined by single spaces, one line per
//! source line, soft character cutoff) and its `Title`, `Keywords` and
//! `Subject` info entries are trimmed. The results are written into the item's
//! fields so the host's search index can pick them up.
//!
//! The pieces:
//!
//! - [`normalize`](normalize::normalize) and [`NormalizationState`]: the text
//!   normalizer (re-exported from the `media-normalize` crate);
//! - [`sanitize_document_info`]: the metadata sanitizer (from `media-metadata`);
//! - [`ExtractorRegistry`] and [`PdfContentExtractor`]: extraction over a
//!   pluggable [`DocumentOpener`];
//! - [`apply_result`], [`on_attach`] and [`on_upload`]: writing results into
//!   host items through [`FieldStore`];
//! - [`MediaIndexConfig`]: YAML configuration.
//!
//! Enable the `pdf` feature for a lopdf-backed opener.
//!
//! ```rust
//! use mediaindex::{
//!     ExtractionScope, ExtractorRegistry, FnOpener, MediaBlob, MediaDescriptor,
//!     NormalizeConfig, StaticDocument,
//! };
//!
//! let registry = ExtractorRegistry::pdf(
//!     FnOpener::new(|_stream| {
//!         Ok(StaticDocument::new(["Héllo, wörld!\n", "日本語 テスト"])
//!             .with_metadata([("Title", "  Hello World  ")].into_iter().collect()))
//!     }),
//!     NormalizeConfig::with_cutoff(1000),
//! );
//!
//! let item = MediaBlob::new("/media/hello", MediaDescriptor::new("pdf", ""), Vec::new());
//! let result = registry
//!     .extract(&item, ExtractionScope::ContentAndMetadata)
//!     .expect("pdf is supported");
//!
//! assert_eq!(result.normalized_content, "Héllo wörld\n日本語 テスト\n");
//! assert!(!result.truncated);
//! assert_eq!(result.metadata.title(), Some("Hello World"));
//! ```

pub mod config;
mod error;
mod extractor;
mod hooks;
mod media;
mod metrics;
#[cfg(feature = "pdf")]
pub mod pdf;
mod reader;
mod registry;
mod writer;

pub use metadata::{
    CleanMetadata, DOCUMENT_INFO_KEYS, KEYWORDS, RawMetadata, SUBJECT, TITLE, sanitize,
    sanitize_document_info, sanitize_value,
};
pub use normalize::{
    DEFAULT_TEXT_CUTOFF_LENGTH, NormalizationState, NormalizeConfig, NormalizedText,
    PageOutcome, RawPage, is_content_char, is_delimiter, normalize, normalize_with_config,
};

pub use crate::config::{ConfigLoadError, CUTOFF_OVERRIDE_KEY, MediaIndexConfig};
pub use crate::error::{ExtractError, ReaderError};
pub use crate::extractor::{
    ContentExtractor, ExtractionResult, ExtractionScope, PdfContentExtractor,
};
pub use crate::hooks::{ItemOutcome, ItemReport, MediaItem, index_item, on_attach, on_upload};
pub use crate::media::{MediaBlob, MediaDescriptor, MediaSource, PDF_EXTENSION, PDF_MIME_TYPE};
pub use crate::metrics::ExtractionMetrics;
pub use crate::reader::{DocumentOpener, DocumentReader, FnOpener, Pages, StaticDocument, pages};
pub use crate::registry::ExtractorRegistry;
pub use crate::writer::{
    EditSession, FieldMapping, FieldStore, FieldWrite, WriteReport, apply_result, write_field,
};

#[cfg(feature = "pdf")]
pub use crate::pdf::{LopdfOpener, LopdfReader};
