//! Slug generation for header anchors.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Derives a URL-fragment identifier from a header title.
///
/// Decomposes to NFKD and drops non-ASCII code points (so accented
/// letters reduce to their base letter), strips everything outside word
/// characters, whitespace, `/` and `-`, trims and lowercases, removes
/// `/` characters, and collapses whitespace/hyphen runs into a single
/// hyphen.
pub fn slugify(value: &str) -> String {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    static SEPARATOR_RUN: OnceLock<Regex> = OnceLock::new();
    let disallowed =
        DISALLOWED.get_or_init(|| Regex::new(r"[^\w\s/-]").expect("invalid slug regex"));
    let separator_run =
        SEPARATOR_RUN.get_or_init(|| Regex::new(r"[-\s]+").expect("invalid slug regex"));

    let ascii: String = value.nfkd().filter(char::is_ascii).collect();
    let stripped = disallowed.replace_all(&ascii, "");
    let lowered = stripped.trim().to_lowercase().replace('/', "");
    separator_run.replace_all(&lowered, "-").into_owned()
}
