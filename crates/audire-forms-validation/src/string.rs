//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Same pattern the registration endpoint accepts.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
        .expect("email pattern compiles")
});

/// Number of characters in a field value.
///
/// Counts `char`s rather than bytes so that a value typed in the browser has
/// the length the user sees.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// True when the value has exactly `len` characters.
pub fn has_exact_length(s: &str, len: usize) -> bool {
    char_len(s) == len
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when a file input value names a PDF document.
///
/// Browsers report file inputs as `C:\fakepath\name.ext`, so only the
/// extension is inspected.
pub fn is_pdf_file_name(value: &str) -> bool {
    value
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
