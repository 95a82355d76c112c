//! In-memory host item used by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read};

use mediaindex::{
    DocumentReader, ExtractorRegistry, FieldStore, FnOpener, MediaDescriptor, MediaItem,
    MediaSource, NormalizeConfig, RawMetadata, ReaderError, StaticDocument,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub values: BTreeMap<String, String>,
    pub editing: bool,
    pub edits: usize,
}

impl Fields {
    pub fn with(names: &[&str]) -> Self {
        Self {
            values: names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

impl FieldStore for Fields {
    fn has_field(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        assert!(self.editing, "field {name} written outside an edit");
        self.values.insert(name.to_string(), value.to_string());
    }

    fn begin_edit(&mut self) {
        assert!(!self.editing, "nested edit");
        self.editing = true;
        self.edits += 1;
    }

    fn end_edit(&mut self) {
        assert!(self.editing, "end without begin");
        self.editing = false;
    }
}

#[derive(Debug, Clone)]
pub struct TestItem {
    pub path: String,
    pub descriptor: MediaDescriptor,
    pub body: Option<Vec<u8>>,
    pub shared: Fields,
    pub versions: Vec<Fields>,
}

impl TestItem {
    /// A PDF item whose stream holds `body`, with a `_Content` shared field and
    /// `versions` versions carrying title, keywords and description.
    pub fn pdf(path: &str, body: &str, versions: usize) -> Self {
        Self {
            path: path.to_string(),
            descriptor: MediaDescriptor::new("pdf", "application/pdf"),
            body: Some(body.as_bytes().to_vec()),
            shared: Fields::with(&["_Content"]),
            versions: (0..versions)
                .map(|_| Fields::with(&["Title", "Keywords", "Description"]))
                .collect(),
        }
    }

    pub fn with_descriptor(mut self, descriptor: MediaDescriptor) -> Self {
        self.descriptor = descriptor;
        self
    }

    pub fn without_stream(mut self) -> Self {
        self.body = None;
        self
    }

    pub fn without_content_field(mut self) -> Self {
        self.shared = Fields::default();
        self
    }

    pub fn untouched(&self) -> bool {
        self.shared.edits == 0 && self.versions.iter().all(|v| v.edits == 0)
    }
}

impl MediaSource for TestItem {
    fn path(&self) -> &str {
        &self.path
    }

    fn descriptor(&self) -> MediaDescriptor {
        self.descriptor.clone()
    }

    fn open_media(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.body {
            Some(body) => Ok(Box::new(Cursor::new(body.as_slice()))),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "blob missing")),
        }
    }
}

impl MediaItem for TestItem {
    type Fields = Fields;

    fn shared_fields(&self) -> &Fields {
        &self.shared
    }

    fn shared_fields_mut(&mut self) -> &mut Fields {
        &mut self.shared
    }

    fn versions_mut(&mut self) -> Vec<&mut Fields> {
        self.versions.iter_mut().collect()
    }
}

/// Parses a tiny text document format: pages separated by form feeds, then an
/// optional metadata block after a line holding `---`, one `Key: value` per
/// line. A body starting with `!corrupt` fails to open; a page holding
/// `!badpage` fails to read.
pub fn parse_fixture(stream: &mut dyn Read) -> Result<FixtureDocument, ReaderError> {
    let mut text = String::new();
    stream.read_to_string(&mut text)?;
    if text.starts_with("!corrupt") {
        return Err(ReaderError::Malformed("corrupt header".into()));
    }

    let (body, info) = match text.split_once("\n---\n") {
        Some((body, info)) => (body, Some(info)),
        None => (text.as_str(), None),
    };
    let mut metadata = RawMetadata::new();
    for line in info.into_iter().flat_map(str::lines) {
        if let Some((key, value)) = line.split_once(':') {
            metadata.insert(key, value);
        }
    }

    Ok(FixtureDocument {
        inner: StaticDocument::new(body.split('\u{c}')).with_metadata(metadata),
    })
}

pub struct FixtureDocument {
    inner: StaticDocument,
}

impl DocumentReader for FixtureDocument {
    fn page_count(&self) -> u32 {
        self.inner.page_count()
    }

    fn page_text(&mut self, page: u32) -> Result<String, ReaderError> {
        let text = self.inner.page_text(page)?;
        if text.contains("!badpage") {
            return Err(ReaderError::Page {
                page,
                message: "unreadable content stream".into(),
            });
        }
        Ok(text)
    }

    fn metadata(&self) -> Result<RawMetadata, ReaderError> {
        self.inner.metadata()
    }
}

pub fn fixture_registry(cutoff: usize) -> ExtractorRegistry {
    ExtractorRegistry::pdf(
        FnOpener::new(parse_fixture),
        NormalizeConfig::with_cutoff(cutoff),
    )
}
