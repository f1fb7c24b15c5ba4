use std::fmt;
use std::str::FromStr;

use crate::{FieldValue, ParseError, RangeUnit};

/// The total size position of a `Content-Range` field: a byte count, or the
/// `*` sentinel when the total size is not known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Size {
    /// A known total size.
    Known(u64),
    /// An unknown total size, written `*` on the wire.
    Unknown,
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Size::Known(size) => write!(f, "{}", size),
            Size::Unknown => f.write_str("*"),
        }
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Size, ParseError> {
        if s == "*" {
            return Ok(Size::Unknown);
        }

        s.parse().map(Size::Known).map_err(|_| ParseError(()))
    }
}

/// The value of a `Content-Range` response header: where in the full body a
/// partial message belongs.
///
/// The range position is either an inclusive `low-high` pair or the `*`
/// sentinel of an *unsatisfied* range, as sent with a `416` response. The
/// size position is a total or the `*` sentinel for "unknown". The two
/// sentinels may not be combined: `*/*` carries no information and neither
/// decodes nor constructs.
///
/// # Example
///
/// ```rust
/// use http_fields::{ContentRangeField, RangeUnit, Size};
///
/// let field: ContentRangeField = "bytes 200-1000/67589".parse().unwrap();
/// assert_eq!(field.unit(), &RangeUnit::Bytes);
/// assert_eq!(field.range(), Some((200, 1000)));
/// assert_eq!(field.total_size(), Size::Known(67589));
///
/// let unsatisfied = ContentRangeField::new(RangeUnit::Bytes, None, Size::Known(67589));
/// assert_eq!(unsatisfied.unwrap().to_string(), "bytes */67589");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRangeField {
    unit: RangeUnit,
    range: Option<(u64, u64)>,
    total_size: Size,
}

impl ContentRangeField {
    /// Creates a `ContentRangeField`.
    ///
    /// `range` is the inclusive `(low, high)` pair, or `None` for an
    /// unsatisfied range. Returns `None` if `range` is absent *and* the
    /// total size is unknown, since `*/*` is not a valid field.
    pub fn new(
        unit: RangeUnit,
        range: Option<(u64, u64)>,
        total_size: Size,
    ) -> Option<ContentRangeField> {
        if range.is_none() && total_size == Size::Unknown {
            return None;
        }

        Some(ContentRangeField { unit, range, total_size })
    }

    /// Returns the unit the range is measured in.
    #[inline]
    pub fn unit(&self) -> &RangeUnit {
        &self.unit
    }

    /// Returns the inclusive `(low, high)` range, or `None` for an
    /// unsatisfied range.
    #[inline]
    pub fn range(&self) -> Option<(u64, u64)> {
        self.range
    }

    /// Returns the total size of the full body.
    #[inline]
    pub fn total_size(&self) -> Size {
        self.total_size
    }
}

impl FieldValue for ContentRangeField {
    const NAME: &'static str = "Content-Range";

    fn parse(text: &str) -> Result<ContentRangeField, ParseError> {
        let (unit, rest) = text.trim().split_once(' ').ok_or(ParseError(()))?;
        if unit == "*" && rest == "*" {
            return Err(ParseError(()));
        }

        let (range, size) = rest.split_once('/').ok_or(ParseError(()))?;
        if range.contains('/') || size.contains('/') {
            return Err(ParseError(()));
        }

        let total_size: Size = size.parse()?;
        let range = match range {
            "*" => None,
            pair => {
                let (low, high) = pair.split_once('-').ok_or(ParseError(()))?;
                let low = low.parse().map_err(|_| ParseError(()))?;
                let high = high.parse().map_err(|_| ParseError(()))?;
                Some((low, high))
            }
        };

        ContentRangeField::new(RangeUnit::new(unit), range, total_size)
            .ok_or(ParseError(()))
    }
}

impl FromStr for ContentRangeField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<ContentRangeField, ParseError> {
        FieldValue::parse(s)
    }
}

impl fmt::Display for ContentRangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.unit)?;
        match self.range {
            Some((low, high)) => write!(f, "{}-{}", low, high)?,
            None => f.write_str("*")?,
        }

        write!(f, "/{}", self.total_size)
    }
}
