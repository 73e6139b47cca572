//! Bounded strings
//!
//! A bounded string type is declared by a marker implementing
//! [`StringBounds`]; [`BoundedString<B>`] is the value type. Every instance has
//! a length (in characters) within `[B::MIN_LENGTH, B::MAX_LENGTH]`, fully
//! matches `B::PATTERN`, and passes the marker's custom check.
//!
//! # Example
//!
//! ```rust
//! use boundkit::{BoundedString, StringBounds};
//!
//! pub struct CountryBounds;
//!
//! impl StringBounds for CountryBounds {
//!     const NAME: &'static str = "CountryCode";
//!     const MIN_LENGTH: usize = 2;
//!     const MAX_LENGTH: usize = 2;
//!     const PATTERN: &'static str = "[A-Z]*";
//! }
//!
//! type CountryCode = BoundedString<CountryBounds>;
//!
//! let it = CountryCode::new("IT").unwrap();
//! assert_eq!(it.length(), 2);
//! assert!(CountryCode::new("it").is_err());
//! assert!(CountryCode::new("ITA").is_err());
//! ```
//!
//! # Gated construction
//!
//! A marker whose [`StringBounds::key`] returns a key is gated. Instances are
//! then only built by [`BoundedString::with_key`] with that exact key; `new`
//! and `parse` fail with an authorization error. Keep the key private and
//! expose factory functions.
//!
//! ```rust
//! use std::sync::LazyLock;
//! use boundkit::{BoundedString, PrivateKey, StringBounds};
//!
//! static SLUG_KEY: LazyLock<PrivateKey> = LazyLock::new(PrivateKey::new);
//!
//! pub struct SlugBounds;
//!
//! impl StringBounds for SlugBounds {
//!     const NAME: &'static str = "Slug";
//!     const MIN_LENGTH: usize = 1;
//!     const MAX_LENGTH: usize = 32;
//!
//!     fn key() -> Option<&'static PrivateKey> {
//!         Some(&*SLUG_KEY)
//!     }
//! }
//!
//! pub type Slug = BoundedString<SlugBounds>;
//!
//! pub fn slugify(title: &str) -> Result<Slug, boundkit::BoundError> {
//!     let slug = title.trim().to_lowercase().replace(' ', "-");
//!     Slug::with_key(slug, &SLUG_KEY)
//! }
//!
//! assert_eq!(slugify("Hello World").unwrap().as_str(), "hello-world");
//! assert!(Slug::new("hello-world").unwrap_err().is_authorization());
//! ```

mod shape;

pub use shape::StringShape;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{rejected, BoundError, ConfigurationError};
use crate::key::PrivateKey;
use crate::validate::validate;

/// The default pattern. It accepts every string and is never evaluated.
pub const MATCH_ALL: &str = ".*";

/// Declaration of a bounded string type.
pub trait StringBounds: Send + Sync + 'static {
    /// Type name used in error messages
    const NAME: &'static str;
    /// Shortest accepted length, in characters
    const MIN_LENGTH: usize;
    /// Longest accepted length, in characters
    const MAX_LENGTH: usize;
    /// Pattern the whole value must match
    const PATTERN: &'static str = MATCH_ALL;

    /// Key for gated construction. Returning a key makes the type gated.
    fn key() -> Option<&'static PrivateKey> {
        None
    }

    /// Name shown in errors and `Debug` output. Defaults to [`Self::NAME`].
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed(Self::NAME)
    }

    /// Extra check run after the length and pattern checks.
    fn check(value: &str) -> Result<(), String> {
        let _ = value;
        Ok(())
    }
}

/// A string guaranteed to satisfy the declaration `B`.
pub struct BoundedString<B: StringBounds> {
    value: String,
    _bounds: PhantomData<B>,
}

impl<B: StringBounds> BoundedString<B> {
    const DECLARED: () = assert!(
        B::MIN_LENGTH <= B::MAX_LENGTH,
        "bounded string declared with MIN_LENGTH greater than MAX_LENGTH"
    );

    /// Validate and cache the declaration.
    ///
    /// Lengths are checked at compile time. The pattern can only be compiled
    /// at run time: construction declares the type on first use, and calling
    /// this at startup surfaces a bad pattern before any value is built.
    pub fn declare() -> Result<Arc<StringShape>, ConfigurationError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::DECLARED;
        shape::shape_of::<B>()
    }

    /// Shortest accepted length.
    pub fn min_length() -> usize {
        B::MIN_LENGTH
    }

    /// Longest accepted length.
    pub fn max_length() -> usize {
        B::MAX_LENGTH
    }

    /// Declared pattern source.
    pub fn pattern() -> &'static str {
        B::PATTERN
    }

    /// Construct without a key. Gated types always refuse this.
    pub fn new(value: impl Into<String>) -> Result<Self, BoundError> {
        Self::build(value.into(), None)
    }

    /// Construct presenting `key`.
    ///
    /// Only a [`PrivateKey`] can be presented; any other value is a type error.
    ///
    /// ```compile_fail
    /// use boundkit::{BoundedString, Length};
    ///
    /// let _ = BoundedString::<Length<1, 4>>::with_key("abc", &"key");
    /// ```
    pub fn with_key(value: impl Into<String>, key: &PrivateKey) -> Result<Self, BoundError> {
        Self::build(value.into(), Some(key))
    }

    fn build(value: String, key: Option<&PrivateKey>) -> Result<Self, BoundError> {
        let shape = Self::declare()?;
        shape.authorize(key)?;
        shape
            .check("value", &value)
            .map_err(|err| rejected(B::type_name(), err))?;
        validate("value", value.as_str())
            .custom_result(|v| B::check(v))
            .finish()
            .map_err(|err| rejected(B::type_name(), err))?;

        Ok(Self {
            value,
            _bounds: PhantomData,
        })
    }

    /// Construct from text. Same as [`BoundedString::new`].
    pub fn parse(text: &str) -> Result<Self, BoundError> {
        Self::new(text)
    }

    /// Alias for [`BoundedString::parse`].
    pub fn of(text: &str) -> Result<Self, BoundError> {
        Self::parse(text)
    }

    /// Length in characters.
    pub fn length(&self) -> usize {
        self.value.chars().count()
    }

    /// The wrapped string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the wrapper, returning the string.
    #[inline]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// Value for embedding in a JSON document.
    pub fn to_json(&self) -> &str {
        &self.value
    }
}

impl<B: StringBounds> fmt::Debug for BoundedString<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&B::type_name()).field(&self.value).finish()
    }
}

impl<B: StringBounds> fmt::Display for BoundedString<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<B: StringBounds> Clone for BoundedString<B> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _bounds: PhantomData,
        }
    }
}

impl<B: StringBounds> PartialEq for BoundedString<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B: StringBounds> Eq for BoundedString<B> {}

impl<B: StringBounds> PartialEq<str> for BoundedString<B> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<B: StringBounds> PartialEq<&str> for BoundedString<B> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<B: StringBounds> PartialOrd for BoundedString<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: StringBounds> Ord for BoundedString<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<B: StringBounds> Hash for BoundedString<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B: StringBounds> FromStr for BoundedString<B> {
    type Err = BoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<B: StringBounds> AsRef<str> for BoundedString<B> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<B: StringBounds> Deref for BoundedString<B> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.value
    }
}

impl<B: StringBounds> From<BoundedString<B>> for String {
    fn from(value: BoundedString<B>) -> Self {
        value.value
    }
}
