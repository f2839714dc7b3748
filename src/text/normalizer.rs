// file: src/text/normalizer.rs
// description: Unicode normalization and diacritic stripping for matching
// reference: https://docs.rs/unicode-normalization

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// NFKC: compatibility decomposition, then canonical composition.
pub fn normalize(text: &str) -> String {
    text.nfkc().collect()
}

/// NFD with every nonspacing mark (general category Mn) removed.
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_nonspacing_mark(*c)).collect()
}

#[inline]
fn is_nonspacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}
