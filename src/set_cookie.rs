use std::fmt;
use std::str::FromStr;

use crate::{Attribute, Cookie, FieldValue, HttpDate, ParseError, SameSite};

/// The value of one `Set-Cookie` response header: a cookie plus a set of
/// attributes deduplicated by kind key.
///
/// At most one attribute per kind may be present. Two conditional rules,
/// mirroring browser enforcement, are checked whenever a field is assembled:
/// `Partitioned` requires `Secure`, and `SameSite=None` requires `Secure`.
/// A field violating either cannot be constructed or decoded.
///
/// # Example
///
/// ```rust
/// use http_fields::SetCookieField;
///
/// let field: SetCookieField = "id=a3fWa; Path=/; Secure; HttpOnly".parse().unwrap();
/// assert_eq!(field.cookie().name_value(), ("id", "a3fWa"));
/// assert!(field.get("Secure").is_some());
///
/// // `SameSite=None` without `Secure` is rejected.
/// assert!("id=a3fWa; SameSite=None".parse::<SetCookieField>().is_err());
/// ```
///
/// More elaborate fields can be put together with [`SetCookieField::build()`]:
///
/// ```rust
/// use http_fields::{Cookie, SetCookieField};
///
/// let field = SetCookieField::build(Cookie::new("id", "a3fWa"))
///     .domain("example.com")
///     .path("/")
///     .secure(true)
///     .http_only(true)
///     .finish()
///     .unwrap();
/// assert_eq!(
///     field.to_string(),
///     "id=a3fWa; Domain=example.com; Path=/; Secure; HttpOnly",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetCookieField {
    cookie: Cookie,
    /// Attributes in insertion order, at most one per kind key.
    attributes: Vec<Attribute>,
}

impl SetCookieField {
    /// Creates a `SetCookieField` from a cookie and its attributes.
    ///
    /// Attributes are deduplicated by kind key, later occurrences winning
    /// over earlier ones. Returns `None` if the resulting set contains
    /// `Partitioned` without `Secure` or `SameSite=None` without `Secure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::{Attribute, Cookie, SetCookieField};
    ///
    /// let cookie = Cookie::new("id", "a3fWa");
    /// let field = SetCookieField::new(cookie.clone(), [Attribute::HttpOnly]).unwrap();
    /// assert_eq!(field.to_string(), "id=a3fWa; HttpOnly");
    ///
    /// assert!(SetCookieField::new(cookie, [Attribute::Partitioned]).is_none());
    /// ```
    pub fn new<A>(cookie: Cookie, attributes: A) -> Option<SetCookieField>
    where
        A: IntoIterator<Item = Attribute>,
    {
        let mut field = SetCookieField { cookie, attributes: Vec::new() };
        for attribute in attributes {
            field.put(attribute);
        }

        if field.violates_secure_rules() {
            return None;
        }

        Some(field)
    }

    /// Creates a [`SetCookieBuilder`] for the given cookie.
    #[inline]
    pub fn build(cookie: Cookie) -> SetCookieBuilder {
        SetCookieBuilder::new(cookie)
    }

    /// Returns the cookie set by this field.
    #[inline]
    pub fn cookie(&self) -> &Cookie {
        &self.cookie
    }

    /// Returns the attribute with kind key `name`, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::{Attribute, SetCookieField};
    ///
    /// let field: SetCookieField = "id=a3fWa; Max-Age=60".parse().unwrap();
    /// assert_eq!(field.get("Max-Age"), Some(&Attribute::MaxAge(60)));
    /// assert_eq!(field.get("Domain"), None);
    /// ```
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name() == name)
    }

    /// Returns an iterator over the attribute set in insertion order.
    #[inline]
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Inserts `attribute`, replacing any existing attribute of the same
    /// kind in place.
    fn put(&mut self, attribute: Attribute) {
        match self.attributes.iter_mut().find(|a| a.name() == attribute.name()) {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    fn violates_secure_rules(&self) -> bool {
        let secure = self.get("Secure").is_some();
        let partitioned = self.get("Partitioned").is_some();
        let same_site_none = self.get("SameSite")
            == Some(&Attribute::SameSite(SameSite::None));

        (partitioned && !secure) || (same_site_none && !secure)
    }
}

impl FieldValue for SetCookieField {
    const NAME: &'static str = "Set-Cookie";

    fn parse(text: &str) -> Result<SetCookieField, ParseError> {
        let mut elements = text.trim().split("; ");
        let cookie = match elements.next() {
            Some(element) => Cookie::parse(element)?,
            None => return Err(ParseError(())),
        };

        let mut field = SetCookieField { cookie, attributes: Vec::new() };
        let mut raw_count = 0;
        for element in elements {
            field.put(element.parse()?);
            raw_count += 1;
        }

        // A duplicated kind collapses under deduplication; decoding must not
        // silently drop it.
        if field.attributes.len() != raw_count || field.violates_secure_rules() {
            return Err(ParseError(()));
        }

        Ok(field)
    }
}

impl FromStr for SetCookieField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<SetCookieField, ParseError> {
        FieldValue::parse(s)
    }
}

impl fmt::Display for SetCookieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cookie.fmt(f)?;
        for attribute in &self.attributes {
            write!(f, "; {}", attribute)?;
        }

        Ok(())
    }
}

/// Builder for [`SetCookieField`] values.
///
/// Created via [`SetCookieField::build()`]. Each method sets one attribute,
/// replacing any previous attribute of the same kind;
/// [`finish()`](SetCookieBuilder::finish) assembles the field, enforcing the
/// same validity rules as [`SetCookieField::new()`].
#[derive(Debug, Clone)]
pub struct SetCookieBuilder {
    cookie: Cookie,
    attributes: Vec<Attribute>,
}

impl SetCookieBuilder {
    /// Creates a new builder wrapping `cookie` with no attributes.
    #[inline]
    pub fn new(cookie: Cookie) -> SetCookieBuilder {
        SetCookieBuilder { cookie, attributes: Vec::new() }
    }

    /// Sets the `Domain` attribute.
    pub fn domain<D: Into<String>>(mut self, domain: D) -> Self {
        self.attributes.push(Attribute::Domain(domain.into()));
        self
    }

    /// Sets the `Expires` attribute.
    pub fn expires<E: Into<HttpDate>>(mut self, date: E) -> Self {
        self.attributes.push(Attribute::Expires(date.into()));
        self
    }

    /// Sets or clears the `HttpOnly` flag.
    pub fn http_only(mut self, value: bool) -> Self {
        self.set_flag(Attribute::HttpOnly, value);
        self
    }

    /// Sets the `Max-Age` attribute, in seconds.
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.attributes.push(Attribute::MaxAge(seconds));
        self
    }

    /// Sets or clears the `Partitioned` flag.
    pub fn partitioned(mut self, value: bool) -> Self {
        self.set_flag(Attribute::Partitioned, value);
        self
    }

    /// Sets the `Path` attribute.
    pub fn path<P: Into<String>>(mut self, path: P) -> Self {
        self.attributes.push(Attribute::Path(path.into()));
        self
    }

    /// Sets or clears the `Secure` flag.
    pub fn secure(mut self, value: bool) -> Self {
        self.set_flag(Attribute::Secure, value);
        self
    }

    /// Sets the `SameSite` attribute.
    pub fn same_site(mut self, value: SameSite) -> Self {
        self.attributes.push(Attribute::SameSite(value));
        self
    }

    fn set_flag(&mut self, flag: Attribute, value: bool) {
        self.attributes.retain(|a| a.name() != flag.name());
        if value {
            self.attributes.push(flag);
        }
    }

    /// Assembles the final `SetCookieField`.
    ///
    /// Returns `None` under the same conditions as [`SetCookieField::new()`].
    pub fn finish(self) -> Option<SetCookieField> {
        SetCookieField::new(self.cookie, self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::SetCookieField;
    use crate::{Attribute, Cookie, FieldValue, SameSite};

    fn parse(text: &str) -> Result<SetCookieField, crate::ParseError> {
        FieldValue::parse(text)
    }

    #[test]
    fn decode_basic() {
        let field = parse("id=a3fWa; Path=/; HttpOnly").unwrap();
        assert_eq!(field.cookie().name_value(), ("id", "a3fWa"));
        assert_eq!(field.get("Path"), Some(&Attribute::Path("/".into())));
        assert_eq!(field.get("HttpOnly"), Some(&Attribute::HttpOnly));
    }

    #[test]
    fn decode_requires_leading_cookie() {
        assert!(parse("Secure; HttpOnly").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn decode_rejects_bad_attributes() {
        assert!(parse("id=a3fWa; NotAnAttribute=1").is_err());
        assert!(parse("id=a3fWa; Max-Age=soon").is_err());
    }

    #[test]
    fn decode_rejects_duplicate_kinds() {
        assert!(parse("id=a3fWa; Path=/; Path=/other").is_err());
        assert!(parse("id=a3fWa; Secure; Secure").is_err());
    }

    #[test]
    fn partitioned_requires_secure() {
        assert!(parse("id=a3fWa; Partitioned").is_err());
        assert!(parse("id=a3fWa; Partitioned; Secure").is_ok());
    }

    #[test]
    fn same_site_none_requires_secure() {
        assert!(parse("id=a3fWa; SameSite=None").is_err());
        assert!(parse("id=a3fWa; SameSite=None; Secure").is_ok());
        // Other SameSite values carry no such requirement.
        assert!(parse("id=a3fWa; SameSite=Lax").is_ok());
    }

    #[test]
    fn construction_enforces_the_same_rules() {
        let cookie = Cookie::new("id", "1");
        assert!(SetCookieField::new(cookie.clone(), [Attribute::Partitioned]).is_none());
        assert!(SetCookieField::new(
            cookie.clone(),
            [Attribute::SameSite(SameSite::None)],
        )
        .is_none());
        assert!(SetCookieField::new(
            cookie,
            [Attribute::SameSite(SameSite::None), Attribute::Secure],
        )
        .is_some());
    }

    #[test]
    fn construction_dedupes_last_wins() {
        let field = SetCookieField::new(
            Cookie::new("id", "1"),
            [Attribute::MaxAge(10), Attribute::HttpOnly, Attribute::MaxAge(20)],
        )
        .unwrap();

        assert_eq!(field.get("Max-Age"), Some(&Attribute::MaxAge(20)));
        assert_eq!(field.to_string(), "id=1; Max-Age=20; HttpOnly");
    }

    #[test]
    fn round_trip() {
        let raw = "id=a3fWa; Domain=example.com; Path=/; Max-Age=2592000; Secure; HttpOnly";
        let field = parse(raw).unwrap();
        assert_eq!(field.to_string(), raw);
    }

    #[test]
    fn builder() {
        let field = SetCookieField::build(Cookie::new("sid", "38afes7a8"))
            .path("/")
            .same_site(SameSite::Strict)
            .http_only(true)
            .finish()
            .unwrap();
        assert_eq!(
            field.to_string(),
            "sid=38afes7a8; Path=/; SameSite=Strict; HttpOnly",
        );

        assert!(SetCookieField::build(Cookie::new("sid", "x"))
            .partitioned(true)
            .finish()
            .is_none());

        // Clearing a flag removes it again.
        let field = SetCookieField::build(Cookie::new("sid", "x"))
            .secure(true)
            .secure(false)
            .finish()
            .unwrap();
        assert_eq!(field.to_string(), "sid=x");
    }
}
