//! Slug normalization and uid escaping.
//!
//! # Responsibility
//! - Turn arbitrary display names into URL-safe slug tokens.
//! - Escape uid strings so they survive inside one path segment.
//!
//! # Invariants
//! - `normalize` is deterministic and idempotent.
//! - Neither `normalize` nor `encode_uid` output contains `::` or `/`.

use crate::model::error::{AddressError, AddressResult};
use once_cell::sync::Lazy;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

static SLUG_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug shape regex"));

/// Characters left as-is in an encoded uid: ASCII alphanumerics plus `-_.~`.
const UID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Normalizes a display name into a slug.
///
/// Transliterates to ASCII (accented letters keep their base letter),
/// lowercases, collapses every run of characters outside `[a-z0-9]` into one
/// `-`, and strips leading and trailing hyphens.
///
/// ```
/// use topicsite_core::slug::normalize;
///
/// assert_eq!(normalize("Theories and Ideas"), "theories-and-ideas");
/// assert_eq!(normalize("Digital_Art"), "digital-art");
/// assert_eq!(normalize("  C++ "), "c");
/// assert_eq!(normalize("Café Notes"), "cafe-notes");
/// ```
pub fn normalize(input: &str) -> String {
    ::slug::slugify(input)
}

/// Returns whether `value` is already a normalized, non-empty slug.
pub fn is_slug(value: &str) -> bool {
    SLUG_SHAPE_RE.is_match(value)
}

/// Percent-encodes a uid string for use in a URL path segment.
///
/// ```
/// use topicsite_core::slug::encode_uid;
///
/// assert_eq!(encode_uid("sample-slug"), "sample-slug");
/// assert_eq!(encode_uid("a::b/c"), "a%3A%3Ab%2Fc");
/// ```
pub fn encode_uid(value: &str) -> String {
    utf8_percent_encode(value, UID_ENCODE_SET).to_string()
}

/// Percent-decodes a uid token taken from a URL path segment.
///
/// # Errors
/// - Returns `AddressError::InvalidEncoding` when the decoded bytes are not UTF-8.
pub fn decode_uid(raw: &str) -> AddressResult<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|err| AddressError::InvalidEncoding(format!("`{raw}`: {err}")))
}
