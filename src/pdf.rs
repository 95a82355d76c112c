//! lopdf-backed document reader, enabled with the `pdf` feature.

use std::io::Read;

use lopdf::{Dictionary, Document, Object, decode_text_string};
use metadata::RawMetadata;

use crate::error::ReaderError;
use crate::reader::{DocumentOpener, DocumentReader};

/// Opens PDF streams with lopdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfOpener;

impl DocumentOpener for LopdfOpener {
    type Reader = LopdfReader;

    fn open(&self, stream: &mut dyn Read) -> Result<LopdfReader, ReaderError> {
        let mut bytes = Vec::new();
        stream.read_to_end(&mut bytes)?;
        LopdfReader::from_bytes(&bytes)
    }
}

/// An opened PDF document.
pub struct LopdfReader {
    document: Document,
    /// lopdf page numbers in document order.
    page_numbers: Vec<u32>,
}

impl LopdfReader {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReaderError> {
        let mut document =
            Document::load_mem(bytes).map_err(|err| ReaderError::Malformed(err.to_string()))?;
        if document.is_encrypted() && document.decrypt("").is_err() {
            return Err(ReaderError::Malformed(
                "document is password protected".to_string(),
            ));
        }
        document.decompress();

        let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();
        Ok(Self {
            document,
            page_numbers,
        })
    }

    fn info_dictionary(&self) -> Result<Option<&Dictionary>, ReaderError> {
        let Ok(info) = self.document.trailer.get(b"Info") else {
            return Ok(None);
        };
        let dict = match info {
            Object::Reference(id) => self
                .document
                .get_dictionary(*id)
                .map_err(|err| ReaderError::Metadata(err.to_string()))?,
            Object::Dictionary(dict) => dict,
            _ => return Ok(None),
        };
        Ok(Some(dict))
    }
}

impl DocumentReader for LopdfReader {
    fn page_count(&self) -> u32 {
        u32::try_from(self.page_numbers.len()).unwrap_or(u32::MAX)
    }

    fn page_text(&mut self, page: u32) -> Result<String, ReaderError> {
        let number = page
            .checked_sub(1)
            .and_then(|index| self.page_numbers.get(index as usize))
            .copied()
            .ok_or_else(|| ReaderError::Page {
                page,
                message: "page out of range".to_string(),
            })?;
        self.document
            .extract_text(&[number])
            .map_err(|err| ReaderError::Page {
                page,
                message: err.to_string(),
            })
    }

    fn metadata(&self) -> Result<RawMetadata, ReaderError> {
        let mut raw = RawMetadata::new();
        let Some(info) = self.info_dictionary()? else {
            return Ok(raw);
        };
        for (key, value) in info.iter() {
            let key = String::from_utf8_lossy(key).into_owned();
            let value = match value {
                Object::String(..) => decode_text_string(value).ok().map(drop_byte_order_mark),
                _ => None,
            };
            raw.insert_raw(key, value);
        }
        Ok(raw)
    }
}

/// lopdf keeps the UTF-8 byte order mark in decoded text strings.
fn drop_byte_order_mark(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_owned(),
        None => text,
    }
}
