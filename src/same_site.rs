use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// The value of the `SameSite` cookie attribute.
///
/// A cookie with a `SameSite` attribute is imposed restrictions on when it
/// is sent to the origin server in a cross-site request. If the value is
/// `Strict`, the cookie is never sent in cross-site requests. If the value
/// is `Lax`, the cookie is only sent in cross-site requests with "safe" HTTP
/// methods. If the value is `None`, the cookie is sent in all requests, but
/// the `Secure` attribute must also be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SameSite {
    /// The `Strict` `SameSite` attribute.
    Strict,
    /// The `Lax` `SameSite` attribute.
    Lax,
    /// The `None` `SameSite` attribute.
    None,
}

impl SameSite {
    /// Returns `true` if `self` is `SameSite::Strict` and `false` otherwise.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::SameSite;
    ///
    /// let strict = SameSite::Strict;
    /// assert!(strict.is_strict());
    /// assert!(!strict.is_lax());
    /// assert!(!strict.is_none());
    /// ```
    #[inline]
    pub fn is_strict(&self) -> bool {
        matches!(self, SameSite::Strict)
    }

    /// Returns `true` if `self` is `SameSite::Lax` and `false` otherwise.
    #[inline]
    pub fn is_lax(&self) -> bool {
        matches!(self, SameSite::Lax)
    }

    /// Returns `true` if `self` is `SameSite::None` and `false` otherwise.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SameSite::None)
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SameSite::Strict => f.write_str("Strict"),
            SameSite::Lax => f.write_str("Lax"),
            SameSite::None => f.write_str("None"),
        }
    }
}

impl FromStr for SameSite {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<SameSite, ParseError> {
        match s {
            "Strict" => Ok(SameSite::Strict),
            "Lax" => Ok(SameSite::Lax),
            "None" => Ok(SameSite::None),
            _ => Err(ParseError(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SameSite;

    #[test]
    fn fixed_table() {
        assert_eq!("Strict".parse::<SameSite>(), Ok(SameSite::Strict));
        assert_eq!("Lax".parse::<SameSite>(), Ok(SameSite::Lax));
        assert_eq!("None".parse::<SameSite>(), Ok(SameSite::None));

        // The table is exact, not case-insensitive.
        assert!("strict".parse::<SameSite>().is_err());
        assert!("NONE".parse::<SameSite>().is_err());
        assert!("".parse::<SameSite>().is_err());
    }
}
