use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::ParseError;

/// One range expression from a `Range` header, in one of its three shapes.
///
/// A range expression is positional syntax only; it says nothing about the
/// collection it will be applied to. [`resolve`](RangeExpr::resolve) turns a
/// shape into a concrete half-open index interval against a known length.
///
/// # Example
///
/// ```rust
/// use http_fields::RangeExpr;
///
/// assert_eq!("200-999".parse(), Ok(RangeExpr::Closed { low: 200, high: 999 }));
/// assert_eq!("9500-".parse(), Ok(RangeExpr::PartialFrom(9500)));
/// assert_eq!("-500".parse(), Ok(RangeExpr::FromEnd(500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeExpr {
    /// `low-high`: both endpoints, inclusive on the wire.
    Closed {
        /// The first index of the range.
        low: u64,
        /// The last index of the range, inclusive.
        high: u64,
    },
    /// `low-`: from `low` through the end of the collection.
    PartialFrom(u64),
    /// `-count`: the trailing part of the collection, indexed from the end.
    ///
    /// The count works like a zeroed index: `FromEnd(0)` denotes a single
    /// trailing element, so `-499` against a length of `1000` equates to the
    /// last `500` elements.
    FromEnd(u64),
}

impl RangeExpr {
    /// Resolves `self` against a collection of length `len` into a half-open
    /// index interval within `[0, len]`.
    ///
    /// This is pure arithmetic with no fallible path: bounds that fall
    /// outside the collection (for example a `Closed` low above `len`) are a
    /// semantic error for the caller to detect, not a resolution failure.
    /// Arithmetic saturates rather than wrapping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::RangeExpr;
    ///
    /// assert_eq!(RangeExpr::Closed { low: 2, high: 5 }.resolve(10), 2..6);
    /// assert_eq!(RangeExpr::PartialFrom(4).resolve(10), 4..10);
    /// assert_eq!(RangeExpr::FromEnd(4).resolve(10), 5..10);
    /// ```
    pub fn resolve(&self, len: u64) -> Range<u64> {
        match *self {
            RangeExpr::Closed { low, high } => low..high.saturating_add(1),
            RangeExpr::PartialFrom(low) => low..len,
            RangeExpr::FromEnd(count) => {
                len.saturating_sub(count.saturating_add(1))..len
            }
        }
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RangeExpr::Closed { low, high } => write!(f, "{}-{}", low, high),
            RangeExpr::PartialFrom(low) => write!(f, "{}-", low),
            RangeExpr::FromEnd(count) => write!(f, "-{}", count),
        }
    }
}

impl FromStr for RangeExpr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RangeExpr, ParseError> {
        if let Some((low, high)) = s.split_once('-') {
            if let (Ok(low), Ok(high)) = (low.parse(), high.parse()) {
                return Ok(RangeExpr::Closed { low, high });
            }
        }

        if let Some(count) = s.strip_prefix('-') {
            if let Ok(count) = count.parse() {
                return Ok(RangeExpr::FromEnd(count));
            }
        }

        if let Some(low) = s.strip_suffix('-') {
            if let Ok(low) = low.parse() {
                return Ok(RangeExpr::PartialFrom(low));
            }
        }

        Err(ParseError(()))
    }
}
