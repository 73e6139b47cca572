//! Bounded integers
//!
//! A bounded integer type is declared by a marker implementing
//! [`IntegerBounds`]; [`BoundedInteger<B>`] is the value type. Every instance
//! satisfies `B::MIN <= value <= B::MAX` and, if the marker overrides
//! [`IntegerBounds::check`], the custom check as well.
//!
//! # Example
//!
//! ```rust
//! use boundkit::{BoundedInteger, IntegerBounds};
//!
//! pub struct PercentBounds;
//!
//! impl IntegerBounds for PercentBounds {
//!     const NAME: &'static str = "Percent";
//!     const MIN: i64 = 0;
//!     const MAX: i64 = 100;
//! }
//!
//! type Percent = BoundedInteger<PercentBounds>;
//!
//! let p = Percent::new(42).unwrap();
//! assert_eq!(p.get(), 42);
//! assert!(Percent::new(101).is_err());
//! assert_eq!("42".parse::<Percent>().unwrap(), p);
//! ```
//!
//! The [`bounded_integer!`](crate::bounded_integer) macro writes the marker and
//! the alias in one go.
//!
//! # Arithmetic
//!
//! Sums, products and negations go back through [`BoundedInteger::new`], so a
//! result that leaves the range is an error rather than an invalid instance.
//! The operators therefore return [`Result`](crate::Result).

mod ops;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::{rejected, BoundError, ConfigurationError, Constraint, ValidationError};
use crate::validate::validate;

/// Declaration of a bounded integer type.
///
/// `MIN <= MAX` is enforced at compile time the first time the type is
/// constructed.
pub trait IntegerBounds: Send + Sync + 'static {
    /// Type name used in error messages
    const NAME: &'static str;
    /// Smallest accepted value
    const MIN: i64;
    /// Largest accepted value
    const MAX: i64;

    /// Name shown in errors and `Debug` output. Defaults to [`Self::NAME`].
    fn type_name() -> Cow<'static, str> {
        Cow::Borrowed(Self::NAME)
    }

    /// Extra check run after the range check.
    fn check(value: i64) -> Result<(), String> {
        let _ = value;
        Ok(())
    }
}

/// A validated `[min, max]` integer range.
///
/// This is the runtime form of a declaration, useful when bounds come from
/// configuration rather than from a type.
///
/// ```rust
/// use boundkit::{ConfigurationError, IntegerRange};
///
/// let range = IntegerRange::new(10, 20).unwrap();
/// assert!(range.contains(15));
/// assert!(range.check("retries", 21).is_err());
///
/// assert_eq!(
///     IntegerRange::new(20, 10),
///     Err(ConfigurationError::InvertedBounds { min: 20, max: 10 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerRange {
    min: i64,
    max: i64,
}

impl IntegerRange {
    /// Declare a range. Fails if `min > max`.
    pub const fn new(min: i64, max: i64) -> Result<Self, ConfigurationError> {
        if min > max {
            Err(ConfigurationError::InvertedBounds { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    /// Lower bound (inclusive)
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound (inclusive)
    pub fn max(&self) -> i64 {
        self.max
    }

    /// True if `value` lies within the range.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Validate `value` against the range, reporting it under `field`.
    pub fn check(&self, field: &str, value: i64) -> Result<i64, ValidationError> {
        validate(field, &value)
            .min_value(self.min)
            .max_value(self.max)
            .finish()?;
        Ok(value)
    }
}

/// An integer guaranteed to lie within the bounds declared by `B`.
pub struct BoundedInteger<B: IntegerBounds> {
    value: i64,
    _bounds: PhantomData<B>,
}

impl<B: IntegerBounds> BoundedInteger<B> {
    const DECLARED: () = assert!(
        B::MIN <= B::MAX,
        "bounded integer declared with MIN greater than MAX"
    );

    /// The declaration as a runtime range.
    pub fn declare() -> Result<IntegerRange, ConfigurationError> {
        IntegerRange::new(B::MIN, B::MAX)
    }

    /// Smallest accepted value.
    pub fn min_value() -> i64 {
        B::MIN
    }

    /// Largest accepted value.
    pub fn max_value() -> i64 {
        B::MAX
    }

    /// Construct from an integer, checking the range and the custom check.
    ///
    /// ```rust
    /// use boundkit::{Between, BoundedInteger};
    ///
    /// type Dozen = BoundedInteger<Between<1, 12>>;
    ///
    /// assert!(Dozen::new(12).is_ok());
    /// assert!(Dozen::new(13).unwrap_err().is_validation());
    /// ```
    pub fn new(value: i64) -> Result<Self, BoundError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::DECLARED;

        validate("value", &value)
            .min_value(B::MIN)
            .max_value(B::MAX)
            .custom_result(|v| B::check(*v))
            .finish()
            .map_err(|err| rejected(B::type_name(), err))?;

        Ok(Self {
            value,
            _bounds: PhantomData,
        })
    }

    /// Construct from the canonical string form.
    ///
    /// Surrounding whitespace is ignored. Text that is not an integer fails
    /// with [`Constraint::NotAnInteger`].
    pub fn parse(text: &str) -> Result<Self, BoundError> {
        let value = text.trim().parse::<i64>().map_err(|_| {
            rejected(
                B::type_name(),
                ValidationError {
                    type_name: B::type_name(),
                    field: "value".to_string(),
                    value: format!("{:?}", text),
                    constraint: Constraint::NotAnInteger,
                    help: None,
                },
            )
        })?;
        Self::new(value)
    }

    /// Alias for [`BoundedInteger::parse`].
    pub fn of(text: &str) -> Result<Self, BoundError> {
        Self::parse(text)
    }

    /// The wrapped integer.
    #[inline]
    pub fn get(&self) -> i64 {
        self.value
    }

    /// Consume the wrapper, returning the integer.
    #[inline]
    pub fn into_inner(self) -> i64 {
        self.value
    }

    /// Value for embedding in a JSON document.
    pub fn to_json(&self) -> i64 {
        self.value
    }
}

impl<B: IntegerBounds> fmt::Debug for BoundedInteger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&B::type_name()).field(&self.value).finish()
    }
}

// Display passes the formatter through, so width, sign and fill flags apply.
impl<B: IntegerBounds> fmt::Display for BoundedInteger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<B: IntegerBounds> Clone for BoundedInteger<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: IntegerBounds> Copy for BoundedInteger<B> {}

impl<B: IntegerBounds> PartialEq for BoundedInteger<B> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<B: IntegerBounds> Eq for BoundedInteger<B> {}

impl<B: IntegerBounds> PartialOrd for BoundedInteger<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: IntegerBounds> Ord for BoundedInteger<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<B: IntegerBounds> Hash for BoundedInteger<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<B: IntegerBounds> FromStr for BoundedInteger<B> {
    type Err = BoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<B: IntegerBounds> TryFrom<i64> for BoundedInteger<B> {
    type Error = BoundError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<B: IntegerBounds> From<BoundedInteger<B>> for i64 {
    fn from(value: BoundedInteger<B>) -> Self {
        value.value
    }
}

impl<B: IntegerBounds> AsRef<i64> for BoundedInteger<B> {
    fn as_ref(&self) -> &i64 {
        &self.value
    }
}
