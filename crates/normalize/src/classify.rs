//! Character classification for indexable text.
//!
//! A character is either *content-bearing* (a letter or digit in any of the
//! supported scripts) or a *delimiter* (whitespace, punctuation, symbols,
//! control characters). The classification is a fixed table of code-point
//! ranges rather than a Unicode property lookup, so the set of characters kept
//! in indexed content never shifts with the Unicode version of the toolchain.
//!
//! # Ranges
//!
//! | Range | Block |
//! |-------|-------|
//! | `0-9`, `A-Z`, `a-z` | ASCII digits and letters |
//! | `U+00A1..U+02B0` | Latin-1 supplement, Latin extended A/B, IPA |
//! | `U+0370..U+2000` | Greek, Cyrillic, Armenian, Hebrew, Arabic, Syriac, ... |
//! | `U+2E80..U+E000` | CJK radicals, kana, Hangul, CJK ideographs |
//! | `U+F900..U+FF00` | CJK compatibility, presentation forms |
//! | above `U+FFFF` | every supplementary-plane character |
//!
//! Upper bounds are exclusive.
//!
//! # Examples
//!
//! ```rust
//! use normalize::is_content_char;
//!
//! assert!(is_content_char('a'));
//! assert!(is_content_char('é'));
//! assert!(is_content_char('語'));
//! assert!(!is_content_char(','));
//! assert!(!is_content_char(' '));
//! ```

/// Inclusive lower bound and exclusive upper bound of each non-ASCII block.
const CONTENT_RANGES: [(u32, u32); 4] = [
    (0x00A1, 0x02B0),
    (0x0370, 0x2000),
    (0x2E80, 0xE000),
    (0xF900, 0xFF00),
];

/// First code point outside the Basic Multilingual Plane.
///
/// Supplementary characters are stored as UTF-16 surrogate pairs
/// (`U+D800..U+E000`), a span the CJK range above covers entirely, so they are
/// content-bearing as a whole.
const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Returns `true` when `c` is a letter or digit that belongs in indexed
/// content, `false` when it only delimits words.
#[inline]
pub fn is_content_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    let cp = u32::from(c);
    if cp >= SUPPLEMENTARY_START {
        return true;
    }
    CONTENT_RANGES
        .iter()
        .any(|&(start, end)| (start..end).contains(&cp))
}

/// Inverse of [`is_content_char`].
#[inline]
pub fn is_delimiter(c: char) -> bool {
    !is_content_char(c)
}
