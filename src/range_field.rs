use std::fmt;
use std::str::FromStr;

use crate::{FieldValue, ParseError, RangeExpr, RangeUnit};

/// The value of a `Range` request header: a unit plus one or more range
/// expressions.
///
/// Wire order and duplicates among the expressions are preserved — a request
/// may legitimately ask for overlapping sub-ranges in a specific order.
///
/// Decoding is deliberately lenient about the individual expressions:
/// an expression that fails to decode is silently skipped, matching how
/// permissive real-world range consumers behave, so the decoded list may be
/// shorter than the wire list. This is unlike the strict all-or-nothing
/// cookie codecs.
///
/// # Example
///
/// ```rust
/// use http_fields::{RangeExpr, RangeField, RangeUnit};
///
/// let field: RangeField = "bytes=0-1023, -500".parse().unwrap();
/// assert_eq!(field.unit(), &RangeUnit::Bytes);
/// assert_eq!(
///     field.ranges(),
///     [RangeExpr::Closed { low: 0, high: 1023 }, RangeExpr::FromEnd(500)],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeField {
    unit: RangeUnit,
    ranges: Vec<RangeExpr>,
}

impl RangeField {
    /// Creates a `RangeField` from a unit and range expressions.
    pub fn new<R>(unit: RangeUnit, ranges: R) -> RangeField
    where
        R: IntoIterator<Item = RangeExpr>,
    {
        RangeField { unit, ranges: ranges.into_iter().collect() }
    }

    /// Returns the unit the ranges are measured in.
    #[inline]
    pub fn unit(&self) -> &RangeUnit {
        &self.unit
    }

    /// Returns the range expressions in wire order.
    #[inline]
    pub fn ranges(&self) -> &[RangeExpr] {
        &self.ranges
    }
}

impl FieldValue for RangeField {
    const NAME: &'static str = "Range";

    fn parse(text: &str) -> Result<RangeField, ParseError> {
        let (unit, exprs) = text.trim().split_once('=').ok_or(ParseError(()))?;

        // Individually malformed expressions are skipped, not fatal.
        let ranges = exprs
            .split(", ")
            .filter_map(|expr| expr.parse().ok())
            .collect();

        Ok(RangeField { unit: RangeUnit::new(unit), ranges })
    }
}

impl FromStr for RangeField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<RangeField, ParseError> {
        FieldValue::parse(s)
    }
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.unit)?;
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            range.fmt(f)?;
        }

        Ok(())
    }
}
