use std::fmt;
use std::str::FromStr;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::{FieldValue, ParseError};

/// The one fixed pattern every HTTP date uses: RFC 1123 in GMT, with the
/// fixed English day and month abbreviations.
const HTTP_DATE: &[BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] \
     [hour]:[minute]:[second] GMT"
);

/// A timestamp as it appears in HTTP header fields.
///
/// Used as the value of a `Date` header and inside the `Expires` attribute
/// of `Set-Cookie`. The wire form is the single fixed pattern
/// `Wed, 21 Oct 2015 07:28:00 GMT`, always in GMT, with no locale
/// dependence; text not matching that exact pattern fails to decode.
///
/// An `HttpDate` holds whole seconds only: the instant is truncated at
/// construction, so two instants differing below one-second resolution
/// compare equal.
///
/// # Example
///
/// ```rust
/// use http_fields::HttpDate;
///
/// let date: HttpDate = "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap();
/// assert_eq!(date.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
///
/// assert!("Wed, 21 Oct 2015 07:28:00 PST".parse::<HttpDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HttpDate(OffsetDateTime);

impl HttpDate {
    /// Creates an `HttpDate` from an instant, truncating to whole seconds
    /// and converting to UTC.
    pub fn new(instant: OffsetDateTime) -> HttpDate {
        let utc = instant.to_offset(time::UtcOffset::UTC);
        HttpDate(utc.replace_nanosecond(0).unwrap_or(utc))
    }

    /// Returns the current time as an `HttpDate`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::HttpDate;
    ///
    /// let now = HttpDate::now();
    /// assert_eq!(now.to_string().parse::<HttpDate>(), Ok(now));
    /// ```
    pub fn now() -> HttpDate {
        HttpDate::new(OffsetDateTime::now_utc())
    }

    /// Returns the underlying instant, at second resolution, in UTC.
    #[inline]
    pub fn instant(&self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for HttpDate {
    fn from(instant: OffsetDateTime) -> HttpDate {
        HttpDate::new(instant)
    }
}

impl FieldValue for HttpDate {
    const NAME: &'static str = "Date";

    fn parse(text: &str) -> Result<HttpDate, ParseError> {
        let parsed = PrimitiveDateTime::parse(text, HTTP_DATE)
            .map_err(|_| ParseError(()))?;
        Ok(HttpDate(parsed.assume_utc()))
    }
}

impl FromStr for HttpDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<HttpDate, ParseError> {
        FieldValue::parse(s)
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.format(HTTP_DATE).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::HttpDate;
    use time::macros::datetime;

    #[test]
    fn decode() {
        let date: HttpDate = "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap();
        assert_eq!(date.instant(), datetime!(2015-10-21 07:28:00 UTC));
    }

    #[test]
    fn encode() {
        let date = HttpDate::new(datetime!(2015-10-21 07:28:00 UTC));
        assert_eq!(date.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
    }

    #[test]
    fn decode_requires_the_exact_pattern() {
        // Wrong or missing zone label.
        assert!("Wed, 21 Oct 2015 07:28:00 UTC".parse::<HttpDate>().is_err());
        assert!("Wed, 21 Oct 2015 07:28:00".parse::<HttpDate>().is_err());
        // Unpadded day.
        assert!("Wed, 1 Oct 2015 07:28:00 GMT".parse::<HttpDate>().is_err());
        // Other date forms.
        assert!("2015-10-21T07:28:00Z".parse::<HttpDate>().is_err());
        assert!("".parse::<HttpDate>().is_err());
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let a = HttpDate::new(datetime!(2015-10-21 07:28:00.1 UTC));
        let b = HttpDate::new(datetime!(2015-10-21 07:28:00.9 UTC));
        assert_eq!(a, b);
    }

    #[test]
    fn round_trip_now() {
        let now = HttpDate::now();
        let reparsed: HttpDate = now.to_string().parse().unwrap();
        assert_eq!(reparsed, now);
    }

    #[test]
    fn non_utc_instants_are_normalized() {
        let date = HttpDate::new(datetime!(2015-10-21 09:28:00 +2));
        assert_eq!(date.to_string(), "Wed, 21 Oct 2015 07:28:00 GMT");
    }
}
