//! Text folding for fingerprint keys.
//!
//! [`normalize`] reduces human-readable text to the form used in every
//! fingerprint key: compatibility-decomposed (NFKD), letters only, lowercase.
//! Two strings that differ only in accents, case, punctuation, digits or
//! spacing fold to the same key.
//!
//! # Examples
//!
//! ```
//! use articlemeta::normalize::normalize;
//!
//! assert_eq!(normalize("Cuidados de saúde"), "cuidadosdesaude");
//! assert_eq!(normalize("Health care after 60th"), "healthcareafterth");
//! assert_eq!(normalize(""), "");
//! ```

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

/// Fold `text` to a lowercase, accent-free, letters-only string.
///
/// Accented characters are decomposed into base letter plus combining marks
/// and the marks are discarded. Anything whose general category is not a
/// letter (digits, punctuation, whitespace, symbols) is dropped rather than
/// replaced. The result depends only on Unicode character data, never on the
/// process locale.
#[must_use]
pub fn normalize(text: &str) -> String {
    let letters: String = text.nfkd().filter(|c| c.is_letter()).collect();
    letters.to_lowercase()
}

/// Take the leading year of a date string (`"2010-08"` → `"2010"`).
///
/// Shorter strings are returned whole.
#[must_use]
pub fn year_prefix(date: &str) -> &str {
    match date.char_indices().nth(4) {
        Some((idx, _)) => &date[..idx],
        None => date,
    }
}
