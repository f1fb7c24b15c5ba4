#![deny(missing_docs)]

//! Typed codecs for structured HTTP header fields.
//!
//! This crate provides strongly-typed values for a small family of HTTP
//! header field grammars — `Cookie`, `Set-Cookie`, `Range`, `Accept-Ranges`,
//! `Content-Range`, and `Date` — together with the parsing and serialization
//! logic for each. A raw field value is decoded into a validated value, and a
//! value renders itself back into the exact wire form, rejecting malformed
//! input instead of silently accepting it.
//!
//! # Usage
//!
//! Add the following to the `[dependencies]` section of your `Cargo.toml`:
//!
//! ```toml
//! http-fields = "0.1"
//! ```
//!
//! # Example
//!
//! ```rust
//! use http_fields::{RangeExpr, RangeField, RangeUnit};
//!
//! let field: RangeField = "bytes=200-999, 9500-".parse().unwrap();
//! assert_eq!(field.unit(), &RangeUnit::Bytes);
//! assert_eq!(field.ranges()[0], RangeExpr::Closed { low: 200, high: 999 });
//! assert_eq!(field.ranges()[1].resolve(10_000), 9500..10_000);
//! ```
//!
//! # Features
//!
//! * **serde**
//!
//!   Enables `serde` `Serialize`/`Deserialize` implementations on every
//!   public value type.

mod attribute;
mod content_range;
mod cookie;
mod cookie_list;
mod date;
mod encoding;
mod fields;
mod range;
mod range_field;
mod same_site;
mod set_cookie;
mod unit;

pub use attribute::Attribute;
pub use content_range::{ContentRangeField, Size};
pub use cookie::Cookie;
pub use cookie_list::CookieList;
pub use date::HttpDate;
pub use encoding::{escape, unescape};
pub use fields::{FieldMap, TypedFields};
pub use range::RangeExpr;
pub use range_field::RangeField;
pub use same_site::SameSite;
pub use set_cookie::{SetCookieBuilder, SetCookieField};
pub use unit::RangeUnit;

/// Re-export of the `time` crate, used by [`HttpDate`].
pub use time;

use std::fmt;

/// Error returned when a header field value fails to decode.
///
/// The error is deliberately opaque: a field value either decodes into a
/// fully validated value or it does not, and callers are expected to treat a
/// failed decode the same way they treat an absent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError(pub(crate) ());

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid HTTP header field value")
    }
}

impl std::error::Error for ParseError {}

/// A value type that is the entire content of one HTTP header field.
///
/// Implementors pair a field name with the codec for that field's grammar:
/// [`parse`](FieldValue::parse) decodes the raw field text and rendering goes
/// through the type's `Display` implementation.
pub trait FieldValue: Sized + fmt::Display {
    /// The header field name this value belongs to.
    const NAME: &'static str;

    /// Decodes a raw field value into `Self`.
    ///
    /// Returns `Err` if the text does not match the field's grammar or fails
    /// its cross-validation rules.
    fn parse(text: &str) -> Result<Self, ParseError>;
}
