use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// Characters removed from heading text when deriving an anchor
    static ref ANCHOR_STRIP_REGEX: Regex = Regex::new(r"[. ,()&#]").unwrap();
}

/// Derive the anchor slug for a heading.
///
/// Only `.`, space, `,`, `(`, `)`, `&` and `#` are removed; any other
/// punctuation (`!`, `:`, `'`, ...) is kept as-is. The result is trimmed
/// and lowercased.
pub fn anchor_slug(text: &str) -> String {
    ANCHOR_STRIP_REGEX
        .replace_all(text, "")
        .trim()
        .to_lowercase()
}
