//! Percent-encoding of cookie values.
//!
//! A cookie value may contain any printable US-ASCII character except
//! control characters, whitespace, double quotes, commas, semicolons, and
//! backslashes; any of those must be percent-encoded on the wire.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, CONTROLS};

/// The characters that must not appear raw inside a cookie value.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'\t')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\');

/// Percent-encodes every character of `value` that may not appear raw in a
/// cookie value. All other bytes pass through unchanged.
///
/// # Example
///
/// ```rust
/// use http_fields::escape;
///
/// assert_eq!(escape("a b;c"), "a%20b%3Bc");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(value: &str) -> Cow<'_, str> {
    percent_encode(value.as_bytes(), COOKIE_VALUE).into()
}

/// Reverses [`escape`], additionally stripping one pair of surrounding
/// double quotes if present.
///
/// Decoding never fails: text containing unparseable escape sequences, or
/// whose decoded form is not UTF-8, is passed through unchanged (minus the
/// surrounding quotes). This mirrors what permissive real-world cookie
/// producers expect.
///
/// # Example
///
/// ```rust
/// use http_fields::unescape;
///
/// assert_eq!(unescape("a%20b%3Bc"), "a b;c");
/// assert_eq!(unescape("\"quoted\""), "quoted");
/// assert_eq!(unescape("100%"), "100%");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    let text = match text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
        Some(inner) => inner,
        None => text,
    };

    match percent_decode_str(text).decode_utf8() {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_restricted_set() {
        assert_eq!(escape("a,b"), "a%2Cb");
        assert_eq!(escape("a;b"), "a%3Bb");
        assert_eq!(escape("a\\b"), "a%5Cb");
        assert_eq!(escape("a\"b"), "a%22b");
        assert_eq!(escape("a\tb"), "a%09b");
        assert_eq!(escape("a\x01b"), "a%01b");
    }

    #[test]
    fn escape_passthrough() {
        assert_eq!(escape("abc123!#$&'()*+-./:<=>?@[]^_`{|}~"),
                   "abc123!#$&'()*+-./:<=>?@[]^_`{|}~");
    }

    #[test]
    fn unescape_round_trip() {
        let original = "this; value, has \"many\" restricted\\chars";
        assert_eq!(unescape(&escape(original)), original);
    }

    #[test]
    fn unescape_strips_one_quote_pair() {
        assert_eq!(unescape("\"\"double\"\""), "\"double\"");
        assert_eq!(unescape("\"unbalanced"), "\"unbalanced");
    }

    #[test]
    fn unescape_never_fails() {
        assert_eq!(unescape("%"), "%");
        assert_eq!(unescape("%zz"), "%zz");
        // An escape that decodes to invalid UTF-8 degrades to the raw text.
        assert_eq!(unescape("%FF"), "%FF");
    }
}
