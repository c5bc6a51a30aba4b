//! Text folding for search matching. Vietnamese place names are full of
//! combining marks, and queries arrive in whatever composition form the
//! input method produced, so both sides are folded to NFC and lowercased
//! before any substring test.

/// Folds a string for matching: Unicode Normalization Form C, then
/// lowercase.
///
/// ```
/// use guide::normalization::fold;
/// assert_eq!(fold("Hội An"), "hội an");
/// ```
pub fn fold(text: impl AsRef<str>) -> String {
    use unicode_normalization::UnicodeNormalization;

    text.as_ref().nfc().collect::<String>().to_lowercase()
}

/// Tests whether `text` contains `folded_term` after folding. The term
/// must already be folded; callers fold it once per query, not once per
/// record.
pub fn contains_term(text: impl AsRef<str>, folded_term: &str) -> bool {
    fold(text).contains(folded_term)
}
