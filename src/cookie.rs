use std::fmt;
use std::str::FromStr;

use crate::encoding::{escape, unescape};
use crate::ParseError;

/// Characters that may not appear in a cookie name, besides control
/// characters and whitespace.
const NAME_SEPARATORS: &[char] = &[
    '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=',
    '{', '}',
];

/// A single `name=value` cookie pair.
///
/// A `Cookie` stores its value in canonical (decoded) form: construction
/// immediately reverses any percent-encoding and strips surrounding quotes,
/// so re-encoding a decoded cookie is format-stable.
///
/// # Example
///
/// ```rust
/// use http_fields::Cookie;
///
/// let cookie = Cookie::new("name", "a value");
/// assert_eq!(cookie.to_string(), "name=a%20value");
///
/// let cookie: Cookie = "name=a%20value".parse().unwrap();
/// assert_eq!(cookie.value(), "a value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cookie {
    name: String,
    value: String,
}

impl Cookie {
    /// Creates a new `Cookie` with the given name and value.
    ///
    /// `value` is unescaped immediately: percent-encoded sequences are
    /// decoded and one pair of surrounding double quotes is stripped, so the
    /// stored value is always canonical.
    ///
    /// The name must not contain control characters, whitespace, or any of
    /// the separator characters `( ) < > @ , ; : \ " / [ ] ? = { }`; a name
    /// violating this renders as an invalid field. [`Cookie::parse`] rejects
    /// such names.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::Cookie;
    ///
    /// let cookie = Cookie::new("name", "value");
    /// assert_eq!(cookie.name_value(), ("name", "value"));
    /// ```
    pub fn new<N, V>(name: N, value: V) -> Cookie
    where
        N: Into<String>,
        V: Into<String>,
    {
        let value = value.into();
        let value = unescape(&value).into_owned();
        Cookie { name: name.into(), value }
    }

    /// Parses a `Cookie` from a raw `name=value` string.
    ///
    /// The text is split on the *first* `=`, so a value containing `=` is
    /// kept whole. Parsing fails if there is no `=` or if the name contains
    /// a forbidden character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::Cookie;
    ///
    /// let cookie = Cookie::parse("id=a3fWa=extra").unwrap();
    /// assert_eq!(cookie.name_value(), ("id", "a3fWa=extra"));
    ///
    /// assert!(Cookie::parse("no-equals-sign").is_err());
    /// assert!(Cookie::parse("bad name=value").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Cookie, ParseError> {
        let (name, value) = text.trim().split_once('=').ok_or(ParseError(()))?;
        if !valid_name(name) {
            return Err(ParseError(()));
        }

        Ok(Cookie::new(name, value))
    }

    /// Returns the name of `self`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the (decoded) value of `self`.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the name and value of `self` as a `(name, value)` tuple.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::Cookie;
    ///
    /// let cookie = Cookie::new("name", "value");
    /// assert_eq!(cookie.name_value(), ("name", "value"));
    /// ```
    #[inline]
    pub fn name_value(&self) -> (&str, &str) {
        (self.name(), self.value())
    }
}

fn valid_name(name: &str) -> bool {
    !name.chars().any(|c| {
        c.is_control() || c.is_whitespace() || NAME_SEPARATORS.contains(&c)
    })
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, escape(&self.value))
    }
}

impl FromStr for Cookie {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Cookie, ParseError> {
        Cookie::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Cookie;

    #[test]
    fn format() {
        let cookie = Cookie::new("foo", "bar");
        assert_eq!(cookie.to_string(), "foo=bar");

        let cookie = Cookie::new("foo", "bar;; a");
        assert_eq!(cookie.to_string(), "foo=bar%3B%3B%20a");
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let cookie = Cookie::parse("a=b=c").unwrap();
        assert_eq!(cookie.name_value(), ("a", "b=c"));
    }

    #[test]
    fn parse_requires_equals() {
        assert!(Cookie::parse("").is_err());
        assert!(Cookie::parse("novalue").is_err());
    }

    #[test]
    fn parse_rejects_bad_names() {
        assert!(Cookie::parse("a b=c").is_err());
        assert!(Cookie::parse("a[b]=c").is_err());
        assert!(Cookie::parse("a:b=c").is_err());
        assert!(Cookie::parse("a\x07b=c").is_err());
    }

    #[test]
    fn value_is_canonical_on_construction() {
        let cookie = Cookie::new("name", "\"quoted%20value\"");
        assert_eq!(cookie.value(), "quoted value");
    }

    #[test]
    fn round_trip() {
        let original = Cookie::new("session", "this; is, a \"value\"");
        let reparsed = Cookie::parse(&original.to_string()).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn parse_trims_whitespace() {
        let cookie = Cookie::parse("  name=value \n").unwrap();
        assert_eq!(cookie.name_value(), ("name", "value"));
    }
}
