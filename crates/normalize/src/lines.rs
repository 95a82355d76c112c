//! Line splitting for page text.
//!
//! Extracted page text mixes line terminators depending on the producer, so a
//! line ends at `\n`, at `\r\n`, or at a lone `\r`. A terminator at the very
//! end of the text does not start an extra empty line.

/// Iterator over the lines of a page, see [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

/// Splits `text` into lines on `\n`, `\r\n` and `\r`.
///
/// ```rust
/// use normalize::lines;
///
/// let split: Vec<&str> = lines("one\r\ntwo\rthree\nfour\n").collect();
/// assert_eq!(split, ["one", "two", "three", "four"]);
/// assert_eq!(lines("").count(), 0);
/// ```
pub fn lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        if rest.is_empty() {
            self.rest = None;
            return None;
        }
        match rest.find(&['\r', '\n'][..]) {
            None => {
                self.rest = None;
                Some(rest)
            }
            Some(idx) => {
                let bytes = rest.as_bytes();
                let skip = if bytes[idx] == b'\r' && bytes.get(idx + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
                self.rest = Some(&rest[idx + skip..]);
                Some(&rest[..idx])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<&str> {
        lines(text).collect()
    }

    #[test]
    fn terminators() {
        assert_eq!(split("a\nb"), ["a", "b"]);
        assert_eq!(split("a\r\nb"), ["a", "b"]);
        assert_eq!(split("a\rb"), ["a", "b"]);
        assert_eq!(split("a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(split("a\n"), ["a"]);
        assert_eq!(split("a\r\n"), ["a"]);
        assert_eq!(split("a\n\n"), ["a", ""]);
    }

    #[test]
    fn empty_and_blank() {
        assert!(split("").is_empty());
        assert_eq!(split("\n"), [""]);
        assert_eq!(split("   "), ["   "]);
    }

    #[test]
    fn multibyte_content_is_kept_whole() {
        assert_eq!(split("日本語\r\nテスト"), ["日本語", "テスト"]);
    }
}
