use std::fmt;
use std::slice;
use std::str::FromStr;

use crate::{Cookie, FieldValue, ParseError};

/// The value of a `Cookie` request header: an insertion-ordered collection
/// of cookies with unique names.
///
/// Inserting a cookie whose name is already present replaces the existing
/// cookie in place, so duplicate names never coexist in a list. Decoding is
/// strict: a raw header in which any element is malformed, or in which two
/// elements share a name, fails as a whole rather than yielding a partial
/// list. A successfully decoded `CookieList` therefore has exactly as many
/// cookies as the raw header had elements.
///
/// # Example
///
/// ```rust
/// use http_fields::{Cookie, CookieList};
///
/// let list: CookieList = "PHPSESSID=298zf09hf012fh2; csrftoken=u32t4o".parse().unwrap();
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.value_of("csrftoken"), Some("u32t4o"));
///
/// let mut list = CookieList::new();
/// list.insert(Cookie::new("a", "1"));
/// list.insert(Cookie::new("b", "2"));
/// assert_eq!(list.to_string(), "a=1; b=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CookieList {
    cookies: Vec<Cookie>,
}

impl CookieList {
    /// Creates an empty `CookieList`.
    #[inline]
    pub fn new() -> CookieList {
        CookieList::default()
    }

    /// Returns the cookie named `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|cookie| cookie.name() == name)
    }

    /// Returns the value of the cookie named `name`, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::CookieList;
    ///
    /// let list: CookieList = "a=1; b=2".parse().unwrap();
    /// assert_eq!(list.value_of("a"), Some("1"));
    /// assert_eq!(list.value_of("c"), None);
    /// ```
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|cookie| cookie.value())
    }

    /// Adds `cookie` to the list, replacing any existing cookie with the
    /// same name in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_fields::{Cookie, CookieList};
    ///
    /// let mut list = CookieList::new();
    /// list.insert(Cookie::new("a", "1"));
    /// list.insert(Cookie::new("a", "2"));
    /// assert_eq!(list.to_string(), "a=2");
    /// ```
    pub fn insert(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name() == cookie.name()) {
            Some(existing) => *existing = cookie,
            None => self.cookies.push(cookie),
        }
    }

    /// Removes and returns the cookie named `name`, if any.
    pub fn remove(&mut self, name: &str) -> Option<Cookie> {
        let index = self.cookies.iter().position(|c| c.name() == name)?;
        Some(self.cookies.remove(index))
    }

    /// Returns an iterator over the cookies in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }

    /// Returns the number of cookies in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns `true` if the list contains no cookies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl FieldValue for CookieList {
    const NAME: &'static str = "Cookie";

    fn parse(text: &str) -> Result<CookieList, ParseError> {
        let mut list = CookieList::new();
        for element in text.trim().split("; ") {
            let cookie = Cookie::parse(element)?;
            if list.get(cookie.name()).is_some() {
                return Err(ParseError(()));
            }

            list.insert(cookie);
        }

        Ok(list)
    }
}

impl FromStr for CookieList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<CookieList, ParseError> {
        FieldValue::parse(s)
    }
}

impl fmt::Display for CookieList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cookie) in self.cookies.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }

            cookie.fmt(f)?;
        }

        Ok(())
    }
}

impl FromIterator<Cookie> for CookieList {
    fn from_iter<I: IntoIterator<Item = Cookie>>(iter: I) -> CookieList {
        let mut list = CookieList::new();
        for cookie in iter {
            list.insert(cookie);
        }

        list
    }
}

impl<'a> IntoIterator for &'a CookieList {
    type Item = &'a Cookie;
    type IntoIter = slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::CookieList;
    use crate::Cookie;

    #[test]
    fn decode_preserves_order() {
        let list: CookieList = "z=26; a=1; m=13".parse().unwrap();
        let names: Vec<_> = list.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn decode_rejects_duplicates() {
        assert!("a=1; a=2".parse::<CookieList>().is_err());
    }

    #[test]
    fn decode_is_all_or_nothing() {
        assert!("a=1; malformed; b=2".parse::<CookieList>().is_err());
        assert!("".parse::<CookieList>().is_err());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut list: CookieList = "a=1; b=2; c=3".parse().unwrap();
        list.insert(Cookie::new("b", "two"));
        assert_eq!(list.to_string(), "a=1; b=two; c=3");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn remove() {
        let mut list: CookieList = "a=1; b=2".parse().unwrap();
        assert_eq!(list.remove("a").unwrap().value(), "1");
        assert!(list.remove("a").is_none());
        assert_eq!(list.to_string(), "b=2");
    }

    #[test]
    fn round_trip() {
        let raw = "PHPSESSID=298zf09hf012fh2; csrftoken=u32t4o; _gat=1";
        let list: CookieList = raw.parse().unwrap();
        assert_eq!(list.to_string(), raw);
    }
}
