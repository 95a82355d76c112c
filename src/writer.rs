//! Writing extraction results into item fields.
//!
//! Writes are read-compare-write: a value is only stored when it is present,
//! non-blank, the field exists on the item and the stored value differs. The
//! edit on a store is begun lazily on the first real change and always ended,
//! so an item that needs no change is never put into editing mode.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extractor::ExtractionResult;
use crate::hooks::MediaItem;

/// Field storage of one item version (or of the item's shared fields).
pub trait FieldStore {
    fn has_field(&self, name: &str) -> bool;

    /// Current value of `name`; `None` when the field does not exist.
    fn field_value(&self, name: &str) -> Option<&str>;

    fn set_field_value(&mut self, name: &str, value: &str);

    fn begin_edit(&mut self);

    fn end_edit(&mut self);
}

/// Outcome of a single [`write_field`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWrite {
    Written,
    /// The stored value already equals the new one.
    Unchanged,
    /// The item has no field with this name.
    MissingField,
    /// No value, or only whitespace; existing values are never cleared.
    EmptyValue,
}

impl FieldWrite {
    pub fn is_written(self) -> bool {
        matches!(self, FieldWrite::Written)
    }
}

/// Scoped edit over a [`FieldStore`].
///
/// `begin_edit` is called on the first write that changes a value; `end_edit`
/// is called when the session drops if an edit was begun.
pub struct EditSession<'a, S: FieldStore + ?Sized> {
    store: &'a mut S,
    editing: bool,
    written: usize,
}

impl<'a, S: FieldStore + ?Sized> EditSession<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self {
            store,
            editing: false,
            written: 0,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Number of fields written through this session.
    pub fn written(&self) -> usize {
        self.written
    }

    fn set(&mut self, name: &str, value: &str) {
        if !self.editing {
            self.store.begin_edit();
            self.editing = true;
        }
        self.store.set_field_value(name, value);
        self.written += 1;
    }
}

impl<S: FieldStore + ?Sized> Drop for EditSession<'_, S> {
    fn drop(&mut self) {
        if self.editing {
            self.store.end_edit();
        }
    }
}

/// Writes `value` into field `name` unless it is blank, the field is missing
/// or the stored value is already equal.
pub fn write_field<S: FieldStore + ?Sized>(
    session: &mut EditSession<'_, S>,
    name: &str,
    value: Option<&str>,
) -> FieldWrite {
    let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
        return FieldWrite::EmptyValue;
    };
    if !session.store.has_field(name) {
        debug!(field = name, "field_write_skipped_missing_field");
        return FieldWrite::MissingField;
    }
    if session.store.field_value(name) == Some(value) {
        return FieldWrite::Unchanged;
    }
    session.set(name, value);
    FieldWrite::Written
}

fn default_content_field() -> String {
    "_Content".to_string()
}

fn default_title_field() -> String {
    "Title".to_string()
}

fn default_keywords_field() -> String {
    "Keywords".to_string()
}

fn default_description_field() -> String {
    "Description".to_string()
}

/// Names of the item fields extraction results are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Shared (version-independent) field receiving normalized content.
    #[serde(default = "default_content_field")]
    pub content: String,

    #[serde(default = "default_title_field")]
    pub title: String,

    #[serde(default = "default_keywords_field")]
    pub keywords: String,

    /// Receives the document's `Subject`.
    #[serde(default = "default_description_field")]
    pub description: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            content: default_content_field(),
            title: default_title_field(),
            keywords: default_keywords_field(),
            description: default_description_field(),
        }
    }
}

/// What [`apply_result`] changed on an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    pub content_written: bool,
    /// Metadata fields written, summed over all versions.
    pub metadata_fields_written: usize,
    /// Versions that were put into editing mode.
    pub versions_edited: usize,
}

impl WriteReport {
    pub fn changed_anything(&self) -> bool {
        self.content_written || self.metadata_fields_written > 0
    }
}

/// Writes `result` into `item`: content into the shared fields, title,
/// keywords and description into every version.
pub fn apply_result<I: MediaItem + ?Sized>(
    item: &mut I,
    result: &ExtractionResult,
    mapping: &FieldMapping,
) -> WriteReport {
    let mut report = WriteReport::default();

    {
        let mut session = EditSession::new(item.shared_fields_mut());
        report.content_written = write_field(
            &mut session,
            &mapping.content,
            Some(result.normalized_content.as_str()),
        )
        .is_written();
    }

    let metadata = &result.metadata;
    let values = [
        (mapping.title.as_str(), metadata.title()),
        (mapping.keywords.as_str(), metadata.keywords()),
        (mapping.description.as_str(), metadata.subject()),
    ];
    for version in item.versions_mut() {
        let mut session = EditSession::new(version);
        for (field, value) in values {
            write_field(&mut session, field, value);
        }
        report.metadata_fields_written += session.written();
        if session.is_editing() {
            report.versions_edited += 1;
        }
    }

    report
}
