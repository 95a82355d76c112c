//! Entry points for the host's media pipeline.
//!
//! `on_attach` runs when a file is attached to an existing item, `on_upload`
//! after a batch upload. Each item is extracted and written independently;
//! a failing item is logged by the registry and never stops the others.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extractor::ExtractionScope;
use crate::media::MediaSource;
use crate::registry::ExtractorRegistry;
use crate::writer::{FieldMapping, FieldStore, WriteReport, apply_result};

/// A stored media item with writable fields.
pub trait MediaItem: MediaSource {
    type Fields: FieldStore;

    /// Version-independent fields.
    fn shared_fields(&self) -> &Self::Fields;

    fn shared_fields_mut(&mut self) -> &mut Self::Fields;

    /// Fields of every language or numbered version of the item.
    fn versions_mut(&mut self) -> Vec<&mut Self::Fields>;
}

/// What happened to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// No extractor handles the item's media.
    Unsupported,
    /// Extraction failed; already logged, nothing written.
    Failed,
    Indexed(WriteReport),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub path: String,
    pub outcome: ItemOutcome,
}

/// Extracts `item` and writes the result into its fields.
///
/// Content is only extracted when the item's shared fields carry the mapped
/// content field; metadata is extracted either way.
pub fn index_item<I: MediaItem>(
    item: &mut I,
    registry: &ExtractorRegistry,
    mapping: &FieldMapping,
) -> ItemReport {
    let scope = if item.shared_fields().has_field(&mapping.content) {
        ExtractionScope::ContentAndMetadata
    } else {
        ExtractionScope::MetadataOnly
    };

    let outcome = match registry.try_extract(&*item, scope) {
        Ok(result) => {
            let report = apply_result(item, &result, mapping);
            debug!(
                path = item.path(),
                content_written = report.content_written,
                metadata_fields_written = report.metadata_fields_written,
                versions_edited = report.versions_edited,
                "item_fields_written"
            );
            ItemOutcome::Indexed(report)
        }
        Err(err) if err.is_unsupported_media() => ItemOutcome::Unsupported,
        Err(_) => ItemOutcome::Failed,
    };

    ItemReport {
        path: item.path().to_owned(),
        outcome,
    }
}

/// Handles a file attached to an item. Does nothing without an item.
pub fn on_attach<I: MediaItem>(
    item: Option<&mut I>,
    registry: &ExtractorRegistry,
    mapping: &FieldMapping,
) -> Option<ItemReport> {
    let item = item?;
    Some(index_item(item, registry, mapping))
}

/// Handles a batch of uploaded items, each independently.
pub fn on_upload<I: MediaItem>(
    items: &mut [I],
    registry: &ExtractorRegistry,
    mapping: &FieldMapping,
) -> Vec<ItemReport> {
    items
        .iter_mut()
        .map(|item| index_item(item, registry, mapping))
        .collect()
}
