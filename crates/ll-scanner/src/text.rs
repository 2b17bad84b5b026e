//! Text handling for the phrase check.
//!
//! A file's bytes go through three steps: [`decode_lossy`] drops invalid
//! UTF-8, [`strip_comments`] removes HTML comments, and [`contains_phrase`]
//! does a case-insensitive substring test on what is left.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `<!-- ... -->`, shortest match, spanning newlines.
#[allow(clippy::expect_used)] // literal pattern
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment pattern"));

/// Decodes UTF-8, silently dropping every invalid byte sequence.
///
/// # Examples
///
/// ```
/// use ll_scanner::decode_lossy;
///
/// assert_eq!(decode_lossy(b"lorem \xFFipsum"), "lorem ipsum");
/// ```
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}

/// Removes every HTML comment in a single non-recursive pass.
///
/// An unterminated `<!--` is left as is.
///
/// # Examples
///
/// ```
/// use ll_scanner::strip_comments;
///
/// assert_eq!(strip_comments("a<!-- b\nc -->d"), "ad");
/// ```
#[must_use]
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    HTML_COMMENT.replace_all(text, "")
}

/// Case-insensitive substring test, with no word-boundary handling.
///
/// # Examples
///
/// ```
/// use ll_scanner::contains_phrase;
///
/// assert!(contains_phrase("Some LOREM IPSUM here", "lorem ipsum"));
/// assert!(contains_phrase("xlorem ipsumx", "lorem ipsum"));
/// assert!(!contains_phrase("lorem\nipsum", "lorem ipsum"));
/// ```
#[must_use]
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.to_lowercase().contains(&phrase.to_lowercase())
}
