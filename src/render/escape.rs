//! Escaping utilities for record-derived text
//!
//! All free-text record values pass through `escape_html` before they are
//! interpolated into markup; identifiers embedded in hrefs pass through
//! `percent_encode_segment`. Only operator-supplied static markup is
//! trusted verbatim.

/// Escape the five HTML-significant characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode a string for use as a single URL path segment.
///
/// Everything outside the unreserved set (RFC 3986) is encoded, including
/// `/`, so an identifier containing a slash stays one segment.
pub fn percent_encode_segment(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.as_bytes() {
        match *b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(*b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}
