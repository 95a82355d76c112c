use crate::config::NormalizeConfig;
use crate::state::{NormalizationState, NormalizedText};

/// Normalizes a lazy sequence of pages into indexable content.
///
/// Pages are pulled one at a time and folded into a fresh
/// [`NormalizationState`]. As soon as a page reports that the cutoff was
/// reached, iteration stops: later pages are never requested from `pages`,
/// which keeps the cost of very large documents bounded when the iterator
/// extracts text on demand.
///
/// # Examples
///
/// ```rust
/// use normalize::normalize;
///
/// let out = normalize(["Héllo, wörld!\n", "日本語 テスト"], 1_000);
/// assert_eq!(out.content, "Héllo wörld\n日本語 テスト\n");
/// assert!(!out.truncated);
///
/// let out = normalize(["one two three four"], 5);
/// assert_eq!(out.content, "one two");
/// assert!(out.truncated);
/// ```
pub fn normalize<I>(pages: I, cutoff: usize) -> NormalizedText
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut state = NormalizationState::new();
    for page in pages {
        if state.push_page(page.as_ref(), cutoff).is_cutoff() {
            break;
        }
    }
    state.finish()
}

/// [`normalize`] with the cutoff taken from a [`NormalizeConfig`].
pub fn normalize_with_config<I>(pages: I, cfg: &NormalizeConfig) -> NormalizedText
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    normalize(pages, cfg.text_cutoff_length)
}
