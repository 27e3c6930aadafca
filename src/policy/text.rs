//! Text folding for Turkish gazette text.
//!
//! Unicode simple case folding keeps `İ` and `ı` apart from `I` and `i`, so a
//! case-insensitive regex for `iş` would miss "İŞ" and "İş". Folding all four
//! to `i` on both sides of the match closes that gap.

/// Collapse dotted/dotless i variants to ASCII `i`. Everything else is kept.
pub fn fold_dotted_i(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'İ' | 'I' | 'ı' => 'i',
            other => other,
        })
        .collect()
}

/// Folded and lowercased form used for substring comparisons.
pub fn normalize(text: &str) -> String {
    fold_dotted_i(text).to_lowercase()
}
