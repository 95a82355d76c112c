//! Media items as seen by extractors: a descriptor, a path for log lines and
//! a way to open the binary stream.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Extension recognised as PDF, compared case-insensitively.
pub const PDF_EXTENSION: &str = "pdf";

/// MIME type recognised as PDF, compared exactly.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Extension and MIME type of a stored media item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Extension without the leading dot, as stored by the host.
    pub extension: String,
    pub mime_type: String,
}

impl MediaDescriptor {
    pub fn new(extension: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            mime_type: mime_type.into(),
        }
    }

    /// True when the extension is `pdf` in any case, or the MIME type is
    /// exactly `application/pdf`.
    ///
    /// ```rust
    /// use mediaindex::MediaDescriptor;
    ///
    /// assert!(MediaDescriptor::new("PDF", "").is_pdf());
    /// assert!(MediaDescriptor::new("bin", "application/pdf").is_pdf());
    /// assert!(!MediaDescriptor::new("pdfx", "application/octet-stream").is_pdf());
    /// ```
    pub fn is_pdf(&self) -> bool {
        self.extension.to_lowercase() == PDF_EXTENSION || self.mime_type == PDF_MIME_TYPE
    }
}

/// Read access to a stored media item.
///
/// Implemented by whatever the host uses to represent an uploaded or attached
/// file. Opening the stream may fail; extractors turn that into
/// [`ExtractError::ReaderAcquisition`](crate::ExtractError::ReaderAcquisition).
pub trait MediaSource {
    /// Path of the item, used only to identify it in log lines.
    fn path(&self) -> &str;

    fn descriptor(&self) -> MediaDescriptor;

    /// Opens the item's binary stream for reading.
    fn open_media(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// A media item held entirely in memory.
#[derive(Debug, Clone)]
pub struct MediaBlob {
    path: String,
    descriptor: MediaDescriptor,
    bytes: Option<Arc<[u8]>>,
}

impl MediaBlob {
    pub fn new(
        path: impl Into<String>,
        descriptor: MediaDescriptor,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            path: path.into(),
            descriptor,
            bytes: Some(bytes.into()),
        }
    }

    /// An item whose stream is missing; opening it fails with `NotFound`.
    pub fn detached(path: impl Into<String>, descriptor: MediaDescriptor) -> Self {
        Self {
            path: path.into(),
            descriptor,
            bytes: None,
        }
    }
}

impl MediaSource for MediaBlob {
    fn path(&self) -> &str {
        &self.path
    }

    fn descriptor(&self) -> MediaDescriptor {
        self.descriptor.clone()
    }

    fn open_media(&self) -> io::Result<Box<dyn Read + '_>> {
        match &self.bytes {
            Some(bytes) => Ok(Box::new(Cursor::new(&bytes[..]))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no media stream stored for {}", self.path),
            )),
        }
    }
}
