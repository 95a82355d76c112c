//! Content extractors.
//!
//! A [`ContentExtractor`] handles one family of media. The PDF extractor
//! opens the document through a [`DocumentOpener`], sanitizes the info
//! dictionary once and folds pages into a [`NormalizationState`] until the
//! pages run out or the cutoff stops it.

use metadata::{CleanMetadata, sanitize_document_info};
use normalize::{NormalizationState, NormalizeConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ExtractError, ReaderError};
use crate::media::{MediaDescriptor, MediaSource};
use crate::reader::{DocumentOpener, DocumentReader, pages};

/// What an extraction run should produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionScope {
    /// Normalized page text and sanitized metadata.
    #[default]
    ContentAndMetadata,
    /// Sanitized metadata only; no page is read.
    MetadataOnly,
}

impl ExtractionScope {
    pub fn wants_content(self) -> bool {
        matches!(self, ExtractionScope::ContentAndMetadata)
    }
}

/// Output of one successful extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Normalized text; every non-empty line ends in `\n`.
    pub normalized_content: String,
    /// Sanitized `Title`, `Keywords` and `Subject`.
    pub metadata: CleanMetadata,
    /// The cutoff stopped normalization before all pages were read.
    pub truncated: bool,
    /// Content characters plus collapse spaces emitted.
    pub char_count: usize,
    /// Pages pulled from the reader.
    pub pages_read: u32,
}

/// Extracts indexable content from one family of media.
pub trait ContentExtractor: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    fn supports(&self, media: &MediaDescriptor) -> bool;

    /// Extracts content from `source`.
    ///
    /// Returns [`ExtractError::UnsupportedMedia`] when `supports` is false for
    /// the source's descriptor. Any stream or reader failure is reported as
    /// [`ExtractError::ReaderAcquisition`] and no partial result is returned.
    fn try_extract(
        &self,
        source: &dyn MediaSource,
        scope: ExtractionScope,
    ) -> Result<ExtractionResult, ExtractError>;
}

/// PDF extractor over a pluggable document reader.
#[derive(Debug, Clone)]
pub struct PdfContentExtractor<O> {
    opener: O,
    config: NormalizeConfig,
}

impl<O: DocumentOpener> PdfContentExtractor<O> {
    pub fn new(opener: O) -> Self {
        Self::with_config(opener, NormalizeConfig::default())
    }

    pub fn with_config(opener: O, config: NormalizeConfig) -> Self {
        Self { opener, config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    fn read_document(
        &self,
        source: &dyn MediaSource,
        scope: ExtractionScope,
    ) -> Result<ExtractionResult, ReaderError> {
        let mut reader = {
            let mut stream = source.open_media()?;
            self.opener.open(&mut stream)?
        };

        let metadata = sanitize_document_info(&reader.metadata()?);

        let mut state = NormalizationState::new();
        let mut pages_read = 0;
        if scope.wants_content() {
            let cutoff = self.config.text_cutoff_length;
            let page_count = reader.page_count();
            for page in pages(&mut reader) {
                let page = page?;
                pages_read = page.number;
                let more_pages = page.number < page_count;
                if state.push_page(&page.text, cutoff).is_cutoff()
                    || state.end_page(cutoff, more_pages).is_cutoff()
                {
                    info!(
                        char_count = state.char_count(),
                        page = page.number,
                        page_count,
                        "extract_truncated"
                    );
                    break;
                }
            }
        } else {
            debug!(path = source.path(), "extract_content_not_requested");
        }

        let text = state.finish();
        Ok(ExtractionResult {
            normalized_content: text.content,
            metadata,
            truncated: text.truncated,
            char_count: text.char_count,
            pages_read,
        })
    }
}

impl<O: DocumentOpener> ContentExtractor for PdfContentExtractor<O> {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supports(&self, media: &MediaDescriptor) -> bool {
        media.is_pdf()
    }

    fn try_extract(
        &self,
        source: &dyn MediaSource,
        scope: ExtractionScope,
    ) -> Result<ExtractionResult, ExtractError> {
        let media = source.descriptor();
        if !self.supports(&media) {
            return Err(ExtractError::UnsupportedMedia {
                extension: media.extension,
                mime_type: media.mime_type,
            });
        }
        self.read_document(source, scope)
            .map_err(|source_err| ExtractError::ReaderAcquisition {
                path: source.path().to_owned(),
                source: source_err,
            })
    }
}
