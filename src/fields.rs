//! The seam between the typed field values and a host's header container.
//!
//! The codecs in this crate never walk a header container themselves; they
//! only need get/set by field name. [`FieldMap`] is that minimal interface,
//! and [`TypedFields`] layers the typed accessors on top of any implementor.

use crate::unit::parse_accept_ranges;
use crate::{
    ContentRangeField, CookieList, FieldValue, HttpDate, RangeField, RangeUnit,
    SetCookieField,
};

/// The header-field container interface the typed accessors need.
///
/// A host (an HTTP client or server) owns the actual container; any ordered
/// collection of name/value pairs that can get and set values by field name
/// can implement this. An implementation for `Vec<(String, String)>` is
/// provided for tests and simple hosts.
pub trait FieldMap {
    /// Returns the single value of the field named `name`, if present.
    ///
    /// For a repeated field this is the first value.
    fn get(&self, name: &str) -> Option<&str>;

    /// Sets the single value of the field named `name`, or removes the
    /// field entirely when `value` is `None`.
    fn set(&mut self, name: &str, value: Option<String>);

    /// Returns every value of the field named `name`, in order.
    fn values(&self, name: &str) -> Vec<String>;

    /// Replaces the full ordered sequence of values for the field named
    /// `name`.
    fn set_values(&mut self, name: &str, values: Vec<String>);
}

impl FieldMap for Vec<(String, String)> {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn set(&mut self, name: &str, value: Option<String>) {
        self.retain(|(field, _)| !field.eq_ignore_ascii_case(name));
        if let Some(value) = value {
            self.push((name.to_string(), value));
        }
    }

    fn values(&self, name: &str) -> Vec<String> {
        self.iter()
            .filter(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn set_values(&mut self, name: &str, values: Vec<String>) {
        self.retain(|(field, _)| !field.eq_ignore_ascii_case(name));
        for value in values {
            self.push((name.to_string(), value));
        }
    }
}

/// Typed getters and setters for the structured fields, over any
/// [`FieldMap`].
///
/// Getters decode the raw field value and yield `None` both when the field
/// is absent and when it fails to decode — an invalid field is treated the
/// same as a missing one. Setters render the value into its exact wire form,
/// or remove the field when given `None`.
///
/// # Example
///
/// ```rust
/// use http_fields::{Cookie, FieldMap, TypedFields};
///
/// let mut headers: Vec<(String, String)> = Vec::new();
/// headers.set("Cookie", Some("a=1; b=2".into()));
///
/// let mut cookies = headers.cookies().unwrap();
/// assert_eq!(cookies.value_of("b"), Some("2"));
///
/// cookies.insert(Cookie::new("c", "3"));
/// headers.set_cookies(Some(cookies));
/// assert_eq!(headers.get("Cookie"), Some("a=1; b=2; c=3"));
/// ```
pub trait TypedFields: FieldMap {
    /// Decodes the field belonging to `F`, if present and valid.
    fn typed<F: FieldValue>(&self) -> Option<F> {
        self.get(F::NAME).and_then(|raw| F::parse(raw).ok())
    }

    /// Renders `value` into the field belonging to `F`, or removes the
    /// field.
    fn set_typed<F: FieldValue>(&mut self, value: Option<F>) {
        self.set(F::NAME, value.map(|value| value.to_string()));
    }

    /// The `Cookie` field as a [`CookieList`].
    fn cookies(&self) -> Option<CookieList> {
        self.typed()
    }

    /// Sets or removes the `Cookie` field.
    fn set_cookies(&mut self, cookies: Option<CookieList>) {
        self.set_typed(cookies);
    }

    /// Every `Set-Cookie` line that decodes as a valid [`SetCookieField`].
    fn set_cookie_fields(&self) -> Vec<SetCookieField> {
        self.values(SetCookieField::NAME)
            .iter()
            .filter_map(|raw| FieldValue::parse(raw).ok())
            .collect()
    }

    /// Replaces the full sequence of `Set-Cookie` lines.
    fn set_set_cookie_fields(&mut self, fields: Vec<SetCookieField>) {
        let rendered = fields.iter().map(|field| field.to_string()).collect();
        self.set_values(SetCookieField::NAME, rendered);
    }

    /// The `Range` field, if present and valid.
    fn range(&self) -> Option<RangeField> {
        self.typed()
    }

    /// Sets or removes the `Range` field.
    fn set_range(&mut self, range: Option<RangeField>) {
        self.set_typed(range);
    }

    /// The `Accept-Ranges` field, if present and valid.
    ///
    /// The literal `none` means "no range unit supported" and yields `None`,
    /// the same as an absent field.
    fn accept_ranges(&self) -> Option<RangeUnit> {
        self.get("Accept-Ranges")
            .and_then(|raw| parse_accept_ranges(raw).ok())
    }

    /// Sets or removes the `Accept-Ranges` field.
    ///
    /// `Other("none")` is refused (the field is removed instead): the `none`
    /// literal is the absence of a unit, not a unit.
    fn set_accept_ranges(&mut self, unit: Option<RangeUnit>) {
        let unit = unit.filter(|unit| *unit != RangeUnit::Other("none".into()));
        self.set("Accept-Ranges", unit.map(|unit| unit.to_string()));
    }

    /// The `Content-Range` field, if present and valid.
    fn content_range(&self) -> Option<ContentRangeField> {
        self.typed()
    }

    /// Sets or removes the `Content-Range` field.
    fn set_content_range(&mut self, range: Option<ContentRangeField>) {
        self.set_typed(range);
    }

    /// The `Date` field, if present and valid.
    fn date(&self) -> Option<HttpDate> {
        self.typed()
    }

    /// Sets or removes the `Date` field.
    fn set_date(&mut self, date: Option<HttpDate>) {
        self.set_typed(date);
    }
}

impl<T: FieldMap + ?Sized> TypedFields for T {}
