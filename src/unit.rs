use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// The unit a range is measured in.
///
/// Only `bytes` is registered; it decodes case-insensitively. Any other text
/// decodes, case preserved, to [`RangeUnit::Other`], so unit decoding never
/// fails.
///
/// On its own, a `RangeUnit` is also the value of an `Accept-Ranges` header.
/// That header has one extra inhabitant: the literal `none`, meaning "no
/// range unit supported". It is deliberately *not* a `RangeUnit` — it is the
/// absence of one — and [`RangeUnit::from_accept_ranges`] maps it to `None`
/// so it can never be confused with `Other("none")`.
///
/// # Example
///
/// ```rust
/// use http_fields::RangeUnit;
///
/// assert_eq!(RangeUnit::new("bytes"), RangeUnit::Bytes);
/// assert_eq!(RangeUnit::new("BYTES"), RangeUnit::Bytes);
/// assert_eq!(RangeUnit::new("pages"), RangeUnit::Other("pages".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeUnit {
    /// The registered `bytes` unit: zero-indexed, inclusive byte offsets.
    Bytes,
    /// An unregistered unit, kept verbatim.
    Other(String),
}

impl RangeUnit {
    /// Decodes a raw unit string. Never fails.
    pub fn new(text: &str) -> RangeUnit {
        if text.eq_ignore_ascii_case("bytes") {
            RangeUnit::Bytes
        } else {
            RangeUnit::Other(text.to_string())
        }
    }

    /// Decodes the value of an `Accept-Ranges` header.
    ///
    /// The literal `none` (case-sensitive) means no range unit is supported
    /// and maps to `None`; anything else decodes as a unit.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::RangeUnit;
    ///
    /// assert_eq!(RangeUnit::from_accept_ranges("bytes"), Some(RangeUnit::Bytes));
    /// assert_eq!(RangeUnit::from_accept_ranges("none"), None);
    /// assert_eq!(
    ///     RangeUnit::from_accept_ranges("NONE"),
    ///     Some(RangeUnit::Other("NONE".into())),
    /// );
    /// ```
    pub fn from_accept_ranges(text: &str) -> Option<RangeUnit> {
        if text == "none" {
            return None;
        }

        Some(RangeUnit::new(text))
    }
}

impl fmt::Display for RangeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RangeUnit::Bytes => f.write_str("bytes"),
            RangeUnit::Other(ref unit) => f.write_str(unit),
        }
    }
}

impl FromStr for RangeUnit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<RangeUnit, Infallible> {
        Ok(RangeUnit::new(s))
    }
}

impl From<&str> for RangeUnit {
    fn from(text: &str) -> RangeUnit {
        RangeUnit::new(text)
    }
}

/// `Accept-Ranges` decoding used by [`TypedFields`](crate::TypedFields):
/// like [`RangeUnit::from_accept_ranges`], but an error rather than `None`
/// for the `none` literal, so the absence value stays distinguishable from a
/// missing header at the call site that needs it.
pub(crate) fn parse_accept_ranges(text: &str) -> Result<RangeUnit, ParseError> {
    RangeUnit::from_accept_ranges(text).ok_or(ParseError(()))
}

#[cfg(test)]
mod tests {
    use super::RangeUnit;

    #[test]
    fn bytes_is_case_insensitive() {
        assert_eq!(RangeUnit::new("bytes"), RangeUnit::Bytes);
        assert_eq!(RangeUnit::new("Bytes"), RangeUnit::Bytes);
        assert_eq!(RangeUnit::new("BYTES"), RangeUnit::Bytes);
    }

    #[test]
    fn other_preserves_case() {
        assert_eq!(RangeUnit::new("Pages"), RangeUnit::Other("Pages".into()));
        assert_eq!(RangeUnit::new("Pages").to_string(), "Pages");
    }

    #[test]
    fn accept_ranges_none_is_absence() {
        assert_eq!(RangeUnit::from_accept_ranges("none"), None);
        // Only the exact lowercase literal is the absence value.
        assert_eq!(
            RangeUnit::from_accept_ranges("None"),
            Some(RangeUnit::Other("None".into())),
        );
    }
}
