//! The reference-counted string value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parse;

/// An immutable, reference-counted string.
///
/// A bound `RcStr` owns a shared heap buffer; clones share that buffer
/// and bump its count instead of copying the bytes. The buffer is freed
/// exactly once, when the last handle referencing it drops. An unbound
/// `RcStr` (the [`Default`] state) holds nothing and allocates nothing.
///
/// Serialization stores just the text, with unbound as the none/null
/// case; the reference count is a property of live handles and is never
/// persisted.
///
/// # Examples
/// ```
/// use rcstr::RcStr;
///
/// let a = RcStr::new("apple");
/// let b = a.clone();
/// assert_eq!(a.ref_count(), 2);
/// assert_eq!(b.as_str(), Some("apple"));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RcStr(Option<Rc<str>>);

impl RcStr {
    /// Create an unbound `RcStr`. No allocation.
    #[inline]
    pub const fn unbound() -> Self {
        Self(None)
    }

    /// Create a bound `RcStr` holding a copy of `text`, with count 1.
    pub fn new(text: &str) -> Self {
        Self(Some(Rc::from(text)))
    }

    /// Number of live handles sharing this value's buffer, or 0 if
    /// unbound. Pure observer.
    pub fn ref_count(&self) -> usize {
        match &self.0 {
            Some(buf) => Rc::strong_count(buf),
            None => 0,
        }
    }

    /// Whether this handle holds a value.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` exactly when the handle is *unbound* — note the
    /// polarity is inverted relative to the name.
    #[deprecated(note = "returns true for the unbound state; use `is_bound`")]
    #[inline]
    pub fn valid(&self) -> bool {
        self.0.is_none()
    }

    /// Borrow the underlying text, or `None` if unbound.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Borrow the underlying bytes, or `None` if unbound.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        self.0.as_deref().map(str::as_bytes)
    }

    /// Parse the leading decimal integer of the text, `atoi`-style:
    /// optional leading ASCII whitespace and sign, digits up to the first
    /// non-digit. Non-numeric text parses as 0, a partial prefix as its
    /// value, and out-of-range input saturates.
    ///
    /// Fails with [`Error::Unbound`] on an unbound handle.
    ///
    /// # Examples
    /// ```
    /// use rcstr::RcStr;
    ///
    /// assert_eq!(RcStr::new("42").parse_int(), Ok(42));
    /// assert_eq!(RcStr::new("7abc").parse_int(), Ok(7));
    /// assert_eq!(RcStr::new("").parse_int(), Ok(0));
    /// ```
    pub fn parse_int(&self) -> Result<i64> {
        match self.as_str() {
            Some(text) => Ok(parse::scan_decimal(text)),
            None => Err(Error::Unbound),
        }
    }
}

impl From<&str> for RcStr {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RcStr {
    fn from(text: String) -> Self {
        Self(Some(Rc::from(text)))
    }
}

/// Writes the raw text for a bound value; writes nothing when unbound.
impl fmt::Display for RcStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(buf) => f.write_str(buf),
            None => Ok(()),
        }
    }
}

impl PartialEq for RcStr {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            // Same buffer implies same content.
            (Some(a), Some(b)) => Rc::ptr_eq(a, b) || a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for RcStr {}

impl PartialOrd for RcStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Total order: unbound sorts below every bound value; bound values
/// compare by byte-wise lexicographic order of their contents.
impl Ord for RcStr {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => {
                if Rc::ptr_eq(a, b) {
                    Ordering::Equal
                } else {
                    a.as_bytes().cmp(b.as_bytes())
                }
            }
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Hash for RcStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_deref().hash(state);
    }
}
