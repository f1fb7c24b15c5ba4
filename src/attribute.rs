use std::fmt;
use std::str::FromStr;

use crate::{HttpDate, ParseError, SameSite};

/// A single `Set-Cookie` attribute.
///
/// Flag attributes (`HttpOnly`, `Secure`, `Partitioned`) render as a bare
/// key; the rest render as `Key=value`. Each variant has a canonical
/// attribute name — its *kind key* — returned by [`Attribute::name()`] and
/// used by [`SetCookieField`](crate::SetCookieField) to deduplicate the
/// attribute set.
///
/// # Example
///
/// ```rust
/// use http_fields::Attribute;
///
/// let attr: Attribute = "Max-Age=3600".parse().unwrap();
/// assert_eq!(attr, Attribute::MaxAge(3600));
/// assert_eq!(attr.name(), "Max-Age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    /// `Domain=<domain-value>`: the host to which the cookie will be sent.
    Domain(String),
    /// `Expires=<date>`: the maximum lifetime of the cookie as an HTTP-date
    /// timestamp.
    Expires(HttpDate),
    /// `HttpOnly`: forbids script access to the cookie.
    HttpOnly,
    /// `Max-Age=<number>`: seconds until the cookie expires. Zero or
    /// negative expires the cookie immediately; takes precedence over
    /// `Expires` when both are present.
    MaxAge(i64),
    /// `Partitioned`: the cookie should be stored using partitioned
    /// storage. Requires `Secure`.
    Partitioned,
    /// `Path=<path-value>`: the request path prefix the cookie is scoped to.
    Path(String),
    /// `Secure`: only send the cookie over `https:`.
    Secure,
    /// `SameSite=<value>`: cross-site request restrictions. `SameSite=None`
    /// requires `Secure`.
    SameSite(SameSite),
}

impl Attribute {
    /// Returns the canonical attribute name of `self`: its kind key.
    ///
    /// Two attributes of the same variant share a name regardless of their
    /// payloads, which is what makes the name usable for deduplication.
    pub fn name(&self) -> &'static str {
        match *self {
            Attribute::Domain(_) => "Domain",
            Attribute::Expires(_) => "Expires",
            Attribute::HttpOnly => "HttpOnly",
            Attribute::MaxAge(_) => "Max-Age",
            Attribute::Partitioned => "Partitioned",
            Attribute::Path(_) => "Path",
            Attribute::Secure => "Secure",
            Attribute::SameSite(_) => "SameSite",
        }
    }

    /// Whether this attribute renders as a bare key with no `=value` part.
    fn is_flag(&self) -> bool {
        matches!(
            self,
            Attribute::HttpOnly | Attribute::Partitioned | Attribute::Secure
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match *self {
            Attribute::Domain(ref domain) => write!(f, "={}", domain),
            Attribute::Expires(ref date) => write!(f, "={}", date),
            Attribute::MaxAge(seconds) => write!(f, "={}", seconds),
            Attribute::Path(ref path) => write!(f, "={}", path),
            Attribute::SameSite(value) => write!(f, "={}", value),
            Attribute::HttpOnly | Attribute::Partitioned | Attribute::Secure => Ok(()),
        }
    }
}

impl FromStr for Attribute {
    type Err = ParseError;

    /// Parses one raw attribute element.
    ///
    /// The text splits on the first `=`. The key must be in the fixed
    /// attribute-name table; flag keys must have no value segment and
    /// value-bearing keys must have exactly one (a second `=` fails the
    /// parse). The value segment is then converted per the key's type.
    fn from_str(s: &str) -> Result<Attribute, ParseError> {
        let (key, value) = match s.trim().split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (s.trim(), None),
        };

        // Value-bearing keys take exactly one `=`-delimited segment.
        let one_value = || -> Result<&str, ParseError> {
            match value {
                Some(value) if !value.contains('=') => Ok(value),
                _ => Err(ParseError(())),
            }
        };

        let attribute = match key {
            "Domain" => Attribute::Domain(one_value()?.to_string()),
            "Expires" => Attribute::Expires(one_value()?.parse()?),
            "HttpOnly" => Attribute::HttpOnly,
            "Max-Age" => {
                Attribute::MaxAge(one_value()?.parse().map_err(|_| ParseError(()))?)
            }
            "Partitioned" => Attribute::Partitioned,
            "Path" => Attribute::Path(one_value()?.to_string()),
            "Secure" => Attribute::Secure,
            "SameSite" => Attribute::SameSite(one_value()?.parse()?),
            _ => return Err(ParseError(())),
        };

        // Flag keys take no value segment at all.
        if attribute.is_flag() && value.is_some() {
            return Err(ParseError(()));
        }

        Ok(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::Attribute;
    use crate::SameSite;

    #[test]
    fn value_attributes() {
        assert_eq!("Domain=example.com".parse::<Attribute>().unwrap(),
                   Attribute::Domain("example.com".into()));
        assert_eq!("Path=/docs".parse::<Attribute>().unwrap(),
                   Attribute::Path("/docs".into()));
        assert_eq!("Max-Age=-30".parse::<Attribute>().unwrap(),
                   Attribute::MaxAge(-30));
        assert_eq!("SameSite=Lax".parse::<Attribute>().unwrap(),
                   Attribute::SameSite(SameSite::Lax));
    }

    #[test]
    fn flag_attributes() {
        assert_eq!("HttpOnly".parse::<Attribute>().unwrap(), Attribute::HttpOnly);
        assert_eq!("Secure".parse::<Attribute>().unwrap(), Attribute::Secure);
        assert_eq!("Partitioned".parse::<Attribute>().unwrap(),
                   Attribute::Partitioned);
    }

    #[test]
    fn expires() {
        let attr = "Expires=Wed, 21 Oct 2015 07:28:00 GMT".parse::<Attribute>();
        let date = match attr.unwrap() {
            Attribute::Expires(date) => date,
            other => panic!("expected Expires, got {:?}", other),
        };

        assert_eq!(date.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn arity_is_enforced() {
        // A flag key with a value segment.
        assert!("Secure=1".parse::<Attribute>().is_err());
        assert!("HttpOnly=".parse::<Attribute>().is_err());

        // Value-bearing keys with no value segment, or more than one.
        assert!("Domain".parse::<Attribute>().is_err());
        assert!("Max-Age".parse::<Attribute>().is_err());
        assert!("Domain=a=b".parse::<Attribute>().is_err());
    }

    #[test]
    fn unknown_keys_fail() {
        assert!("Version=1".parse::<Attribute>().is_err());
        assert!("".parse::<Attribute>().is_err());
        // The table is exact, not case-insensitive.
        assert!("secure".parse::<Attribute>().is_err());
        assert!("max-age=10".parse::<Attribute>().is_err());
    }

    #[test]
    fn bad_sub_parses_fail() {
        assert!("Max-Age=ten".parse::<Attribute>().is_err());
        assert!("SameSite=Sideways".parse::<Attribute>().is_err());
        assert!("Expires=tomorrow".parse::<Attribute>().is_err());
    }

    #[test]
    fn render() {
        assert_eq!(Attribute::Domain("example.com".into()).to_string(),
                   "Domain=example.com");
        assert_eq!(Attribute::MaxAge(3600).to_string(), "Max-Age=3600");
        assert_eq!(Attribute::HttpOnly.to_string(), "HttpOnly");
        assert_eq!(Attribute::SameSite(SameSite::Strict).to_string(),
                   "SameSite=Strict");
    }
}
