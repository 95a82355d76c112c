//! Metadata sanitization.
//!
//! Document info dictionaries are filled in by whatever tool produced the
//! file, so values routinely carry padding or are left blank. Sanitizing keeps
//! the rules deliberately small:
//!
//! - a missing key, a key without a value, or a blank value is absent;
//! - anything else is trimmed of leading and trailing whitespace.
//!
//! No case folding, no length limits, no character filtering.

use std::collections::BTreeMap;

use crate::keys::DOCUMENT_INFO_KEYS;
use crate::types::{CleanMetadata, RawMetadata};

/// Cleans the requested `keys` of `raw`.
///
/// Every requested key gets an entry in the result, `None` when absent. Keys
/// of `raw` that were not requested are ignored. Returned values are freshly
/// allocated and never borrow from `raw`.
///
/// # Examples
///
/// ```rust
/// use metadata::{sanitize, RawMetadata};
///
/// let raw: RawMetadata = [("Title", "  Hello World  "), ("Subject", " ")]
///     .into_iter()
///     .collect();
///
/// let clean = sanitize(&raw, ["Title", "Subject", "Keywords"]);
/// assert_eq!(clean.get("Title"), Some("Hello World"));
/// assert_eq!(clean.get("Subject"), None);
/// assert_eq!(clean.get("Keywords"), None);
/// assert!(clean.was_requested("Keywords"));
/// ```
pub fn sanitize<I>(raw: &RawMetadata, keys: I) -> CleanMetadata
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let entries: BTreeMap<String, Option<String>> = keys
        .into_iter()
        .map(|key| {
            let key = key.as_ref();
            (key.to_owned(), sanitize_value(raw.get(key)))
        })
        .collect();
    CleanMetadata::from_entries(entries)
}

/// Sanitizes the fixed document info key set (`Title`, `Keywords`, `Subject`).
pub fn sanitize_document_info(raw: &RawMetadata) -> CleanMetadata {
    sanitize(raw, DOCUMENT_INFO_KEYS)
}

/// Trims a single raw value, returning `None` for missing or blank input.
///
/// ```rust
/// use metadata::sanitize_value;
///
/// assert_eq!(sanitize_value(Some("\t Annual report \n")), Some("Annual report".to_string()));
/// assert_eq!(sanitize_value(Some(" \u{3000} ")), None);
/// assert_eq!(sanitize_value(None), None);
/// ```
pub fn sanitize_value(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
