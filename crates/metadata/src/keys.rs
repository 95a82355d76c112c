//! Well-known document info keys.

/// Document title.
pub const TITLE: &str = "Title";

/// Comma- or semicolon-separated keywords, kept verbatim.
pub const KEYWORDS: &str = "Keywords";

/// Document subject; usually surfaced as a description.
pub const SUBJECT: &str = "Subject";

/// Keys read from every document during extraction.
pub const DOCUMENT_INFO_KEYS: [&str; 3] = [TITLE, KEYWORDS, SUBJECT];
