use serde::{Deserialize, Serialize};

/// Raw text of one document page, as produced by a document reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    /// 1-based page number in document order.
    pub number: u32,
    /// Extracted text, line terminators included.
    pub text: String,
}

impl RawPage {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

impl AsRef<str> for RawPage {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}
