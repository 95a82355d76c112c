//! Document reader abstraction.
//!
//! Extraction never parses a document format itself. A [`DocumentOpener`]
//! turns a media stream into a [`DocumentReader`], which hands out page text
//! one page at a time and the raw info dictionary. Pages are pulled lazily, so
//! a reader is never asked for pages past the point where normalization stops.

use std::io::Read;

use metadata::RawMetadata;
use normalize::RawPage;

use crate::error::ReaderError;

/// An opened document.
pub trait DocumentReader {
    /// Number of pages; pages are numbered `1..=page_count()`.
    fn page_count(&self) -> u32;

    /// Text of one page, lines separated by line breaks.
    fn page_text(&mut self, page: u32) -> Result<String, ReaderError>;

    /// Raw entries of the document info dictionary.
    fn metadata(&self) -> Result<RawMetadata, ReaderError>;
}

/// Opens documents from media streams.
pub trait DocumentOpener: Send + Sync {
    type Reader: DocumentReader;

    fn open(&self, stream: &mut dyn Read) -> Result<Self::Reader, ReaderError>;
}

/// Lazy, in-order iterator over the pages of a reader.
///
/// Stops after the first error.
pub struct Pages<'a, R: ?Sized> {
    reader: &'a mut R,
    /// `None` once the page numbers are exhausted.
    next: Option<u32>,
    count: u32,
    failed: bool,
}

/// Iterates the pages of `reader` in order, fetching each page on demand.
pub fn pages<R: DocumentReader + ?Sized>(reader: &mut R) -> Pages<'_, R> {
    let count = reader.page_count();
    Pages {
        reader,
        next: Some(1),
        count,
        failed: false,
    }
}

impl<R: DocumentReader + ?Sized> Iterator for Pages<'_, R> {
    type Item = Result<RawPage, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let number = self.next.filter(|number| *number <= self.count)?;
        self.next = number.checked_add(1);
        match self.reader.page_text(number) {
            Ok(text) => Some(Ok(RawPage::new(number, text))),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.next {
            Some(next) if !self.failed => self.count.saturating_sub(next - 1) as usize,
            _ => 0,
        };
        (0, Some(left))
    }
}

/// A document whose pages and metadata are already in memory.
///
/// Useful for hosts that obtain text from elsewhere, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticDocument {
    pages: Vec<String>,
    metadata: RawMetadata,
    pages_served: u32,
}

impl StaticDocument {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            metadata: RawMetadata::new(),
            pages_served: 0,
        }
    }

    pub fn with_metadata(mut self, metadata: RawMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of `page_text` calls answered so far.
    pub fn pages_served(&self) -> u32 {
        self.pages_served
    }
}

impl DocumentReader for StaticDocument {
    fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    fn page_text(&mut self, page: u32) -> Result<String, ReaderError> {
        let index = page
            .checked_sub(1)
            .map(|index| index as usize)
            .filter(|index| *index < self.pages.len())
            .ok_or_else(|| ReaderError::Page {
                page,
                message: format!("document has {} pages", self.pages.len()),
            })?;
        self.pages_served += 1;
        Ok(self.pages[index].clone())
    }

    fn metadata(&self) -> Result<RawMetadata, ReaderError> {
        Ok(self.metadata.clone())
    }
}

/// Adapts a closure into a [`DocumentOpener`].
///
/// ```rust
/// use mediaindex::{DocumentOpener, DocumentReader, FnOpener, StaticDocument};
///
/// let opener = FnOpener::new(|_stream| {
///     Ok(StaticDocument::new(["first page", "second page"]))
/// });
/// let mut reader = opener.open(&mut std::io::empty()).unwrap();
/// assert_eq!(reader.page_count(), 2);
/// assert_eq!(reader.page_text(2).unwrap(), "second page");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOpener<F>(F);

impl<F, R> FnOpener<F>
where
    F: Fn(&mut dyn Read) -> Result<R, ReaderError> + Send + Sync,
    R: DocumentReader,
{
    pub fn new(open: F) -> Self {
        Self(open)
    }
}

impl<F, R> DocumentOpener for FnOpener<F>
where
    F: Fn(&mut dyn Read) -> Result<R, ReaderError> + Send + Sync,
    R: DocumentReader,
{
    type Reader = R;

    fn open(&self, stream: &mut dyn Read) -> Result<R, ReaderError> {
        (self.0)(stream)
    }
}
