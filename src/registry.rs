//! Extractor selection and the logged extraction entry point.

use std::sync::Arc;
use std::time::Instant;

use normalize::NormalizeConfig;
use tracing::{Level, debug, error, info};

use crate::error::ExtractError;
use crate::extractor::{ContentExtractor, ExtractionResult, ExtractionScope, PdfContentExtractor};
use crate::media::{MediaDescriptor, MediaSource};
use crate::metrics::{ExtractionMetrics, MetricsSpan};
use crate::reader::DocumentOpener;

/// Ordered set of extractors; the first one supporting an item's media wins.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn ContentExtractor>>,
    metrics: Option<Arc<dyn ExtractionMetrics>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only the PDF extractor.
    pub fn pdf<O>(opener: O, config: NormalizeConfig) -> Self
    where
        O: DocumentOpener + 'static,
    {
        Self::new().with_extractor(PdfContentExtractor::with_config(opener, config))
    }

    pub fn with_extractor<E: ContentExtractor + 'static>(mut self, extractor: E) -> Self {
        self.register(Box::new(extractor));
        self
    }

    pub fn register(&mut self, extractor: Box<dyn ContentExtractor>) {
        self.extractors.push(extractor);
    }

    pub fn with_metrics(mut self, recorder: Arc<dyn ExtractionMetrics>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// First extractor supporting `media`.
    pub fn find(&self, media: &MediaDescriptor) -> Option<&dyn ContentExtractor> {
        self.extractors
            .iter()
            .find(|extractor| extractor.supports(media))
            .map(|extractor| &**extractor)
    }

    /// Whether any registered extractor handles `media`.
    pub fn supports(&self, media: &MediaDescriptor) -> bool {
        self.find(media).is_some()
    }

    /// Extracts `source`, logging the outcome and feeding the metrics
    /// observer.
    ///
    /// Unsupported media is returned as [`ExtractError::UnsupportedMedia`]
    /// and is neither logged above `debug` nor recorded.
    pub fn try_extract(
        &self,
        source: &dyn MediaSource,
        scope: ExtractionScope,
    ) -> Result<ExtractionResult, ExtractError> {
        let media = source.descriptor();
        let Some(extractor) = self.find(&media) else {
            debug!(
                path = source.path(),
                extension = %media.extension,
                mime_type = %media.mime_type,
                "extract_skipped_unsupported_media"
            );
            return Err(ExtractError::UnsupportedMedia {
                extension: media.extension,
                mime_type: media.mime_type,
            });
        };

        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "extract.document",
            path = source.path(),
            extractor = extractor.name(),
            scope = ?scope
        );
        let _guard = span.enter();
        let metrics_span = MetricsSpan::start(self.metrics.as_ref());

        match extractor.try_extract(source, scope) {
            Ok(result) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    char_count = result.char_count,
                    pages_read = result.pages_read,
                    truncated = result.truncated,
                    metadata_fields = result.metadata.present_count(),
                    elapsed_micros,
                    "extract_success"
                );
                if let Some(metrics) = metrics_span {
                    if result.truncated {
                        metrics.record_truncation(result.char_count);
                    }
                    metrics.record(Ok(()));
                }
                Ok(result)
            }
            Err(err) if err.is_unsupported_media() => {
                debug!(error = %err, "extract_skipped_unsupported_media");
                Err(err)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                error!(error = %err, elapsed_micros, "extract_failure");
                if let Some(metrics) = metrics_span {
                    metrics.record(Err(err.clone()));
                }
                Err(err)
            }
        }
    }

    /// Extracts `source`, returning `None` for unsupported media and for any
    /// failure. Failures are logged once.
    pub fn extract(
        &self,
        source: &dyn MediaSource,
        scope: ExtractionScope,
    ) -> Option<ExtractionResult> {
        self.try_extract(source, scope).ok()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.extractors.iter().map(|e| e.name()).collect();
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &names)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
