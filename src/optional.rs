//! Capacity limits that may be unbounded
//!
//! [`OptionalBoundInteger`] is either a positive integer or
//! [`OptionalBoundInteger::Unbounded`]. `Unbounded` is the greatest value and
//! absorbs addition, so code that combines limits never has to special-case
//! "no limit".
//!
//! # Example
//!
//! ```rust
//! use boundkit::OptionalBoundInteger;
//!
//! let per_user = OptionalBoundInteger::of(10).unwrap();
//! let per_team = OptionalBoundInteger::of_unbounded();
//!
//! // The stricter limit wins.
//! assert_eq!(per_user.min(per_team), per_user);
//!
//! // No limit plus anything is still no limit.
//! assert!((per_user + per_team).is_unbounded());
//!
//! assert_eq!((per_user + 5).unwrap().int_value().unwrap(), 15);
//! ```

use std::fmt;
use std::iter::Sum;
use std::num::NonZeroU64;
use std::ops::Add;
use std::str::FromStr;

use crate::error::{rejected, BoundError, Constraint, StateError, ValidationError};
use crate::validate::validate;

const NAME: &str = "OptionalBoundInteger";
const UNBOUNDED: &str = "unbounded";

/// A positive integer, or no bound at all.
///
/// Variants are declared in ascending order, so the derived ordering puts every
/// `Bounded` value below `Unbounded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionalBoundInteger {
    /// A concrete bound, at least 1
    Bounded(NonZeroU64),
    /// No bound
    #[default]
    Unbounded,
}

impl OptionalBoundInteger {
    /// A concrete bound. Fails unless `n >= 1`.
    pub fn of(n: i64) -> Result<Self, BoundError> {
        validate("value", &n)
            .min_value(1)
            .finish()
            .map_err(|err| rejected(NAME, err))?;
        let n = u64::try_from(n)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or_else(|| below_one(n.to_string()))?;
        Ok(Self::Bounded(n))
    }

    /// No bound.
    pub const fn of_unbounded() -> Self {
        Self::Unbounded
    }

    /// True for [`OptionalBoundInteger::Unbounded`].
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// The concrete bound.
    ///
    /// Fails with a [`StateError`] on `Unbounded`, which has no numeric value.
    pub fn int_value(&self) -> Result<u64, StateError> {
        match self {
            Self::Bounded(n) => Ok(n.get()),
            Self::Unbounded => Err(StateError {
                type_name: NAME,
                message: "cannot read a numeric value from an unbounded instance",
            }),
        }
    }

    /// The concrete bound, or `None` when unbounded.
    pub fn as_option(&self) -> Option<u64> {
        match self {
            Self::Bounded(n) => Some(n.get()),
            Self::Unbounded => None,
        }
    }

    /// Value for embedding in a JSON document; `None` stands for unbounded.
    pub fn to_json(&self) -> Option<u64> {
        self.as_option()
    }

    /// Add a raw integer.
    ///
    /// `Unbounded` absorbs any `k`. A bounded sum below 1 fails with a
    /// validation error; one beyond `u64::MAX` saturates.
    pub fn checked_add(self, k: i64) -> Result<Self, BoundError> {
        let n = match self {
            Self::Unbounded => return Ok(Self::Unbounded),
            Self::Bounded(n) => n.get(),
        };
        let sum = if k >= 0 {
            Some(n.saturating_add(k.unsigned_abs()))
        } else {
            n.checked_sub(k.unsigned_abs())
        };
        sum.and_then(NonZeroU64::new)
            .map(Self::Bounded)
            .ok_or_else(|| below_one(format!("{} + {}", n, k)))
    }
}

fn below_one(value: String) -> BoundError {
    rejected(
        NAME,
        ValidationError {
            type_name: NAME.into(),
            field: "value".to_string(),
            value,
            constraint: Constraint::MinValue("1".to_string()),
            help: None,
        },
    )
}

impl From<NonZeroU64> for OptionalBoundInteger {
    fn from(n: NonZeroU64) -> Self {
        Self::Bounded(n)
    }
}

impl From<Option<NonZeroU64>> for OptionalBoundInteger {
    fn from(n: Option<NonZeroU64>) -> Self {
        n.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl TryFrom<u64> for OptionalBoundInteger {
    type Error = BoundError;

    /// A concrete bound over the full `u64` range. Fails on zero.
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(n)
            .map(Self::Bounded)
            .ok_or_else(|| below_one(n.to_string()))
    }
}

impl Add for OptionalBoundInteger {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Bounded(a), Self::Bounded(b)) => Self::Bounded(a.saturating_add(b.get())),
            _ => Self::Unbounded,
        }
    }
}

impl Add<i64> for OptionalBoundInteger {
    type Output = Result<Self, BoundError>;

    fn add(self, k: i64) -> Self::Output {
        self.checked_add(k)
    }
}

/// Sum of all limits; `None` for an empty iterator.
impl Sum<OptionalBoundInteger> for Option<OptionalBoundInteger> {
    fn sum<I: Iterator<Item = OptionalBoundInteger>>(iter: I) -> Self {
        iter.reduce(|a, b| a + b)
    }
}

impl fmt::Display for OptionalBoundInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(n) => fmt::Display::fmt(n, f),
            Self::Unbounded => f.pad(UNBOUNDED),
        }
    }
}

impl FromStr for OptionalBoundInteger {
    type Err = BoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(UNBOUNDED) {
            return Ok(Self::Unbounded);
        }
        // Positive text covers the whole u64 range; zero and negative text
        // still go through `of` so they report the lower bound.
        if let Ok(n) = s.parse::<u64>() {
            return Self::try_from(n);
        }
        let n = s.parse::<i64>().map_err(|_| {
            rejected(
                NAME,
                ValidationError {
                    type_name: NAME.into(),
                    field: "value".to_string(),
                    value: format!("{:?}", s),
                    constraint: Constraint::NotAnInteger,
                    help: Some("expected a positive integer or \"unbounded\"".to_string()),
                },
            )
        })?;
        Self::of(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(n: i64) -> OptionalBoundInteger {
        OptionalBoundInteger::of(n).unwrap()
    }

    fn unbounded() -> OptionalBoundInteger {
        OptionalBoundInteger::of_unbounded()
    }

    #[test]
    fn test_of() {
        assert_eq!(of(1).int_value(), Ok(1));
        assert_eq!(of(i64::MAX).int_value(), Ok(i64::MAX as u64));
    }

    #[test]
    fn test_of_rejects_non_positive() {
        let err = OptionalBoundInteger::of(0).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.constraint(), Some(&Constraint::MinValue("1".to_string())));
        assert!(OptionalBoundInteger::of(-3).unwrap_err().is_validation());
    }

    #[test]
    fn test_unbounded() {
        assert!(unbounded().is_unbounded());
        assert!(!of(1).is_unbounded());
        let err = unbounded().int_value().unwrap_err();
        assert_eq!(
            err.message,
            "cannot read a numeric value from an unbounded instance"
        );
        assert!(BoundError::from(err).is_state());
    }

    #[test]
    fn test_ordering() {
        assert!(of(1) < of(2));
        assert!(of(2) < unbounded());
        assert!(of(1) < unbounded());
        assert!(of(i64::MAX) < unbounded());
        assert_eq!(unbounded().cmp(&unbounded()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(of(3).min(unbounded()), of(3));
        assert_eq!(of(3).max(unbounded()), unbounded());
        assert_eq!([of(4), of(2), of(9)].iter().min(), Some(&of(2)));
    }

    #[test]
    fn test_add_bounded() {
        assert_eq!(of(1) + of(1), of(2));
    }

    #[test]
    fn test_add_absorbs() {
        assert_eq!(of(1) + unbounded(), unbounded());
        assert_eq!(unbounded() + of(1), unbounded());
        assert_eq!(unbounded() + unbounded(), unbounded());
    }

    #[test]
    fn test_add_saturates() {
        let max = OptionalBoundInteger::Bounded(NonZeroU64::MAX);
        assert_eq!(max + of(1), max);
        assert_eq!((max + 1).unwrap(), max);
    }

    #[test]
    fn test_add_raw() {
        assert_eq!((of(1) + 0).unwrap(), of(1));
        assert_eq!((of(1) + 4).unwrap(), of(5));
        assert_eq!((of(5) + -4).unwrap(), of(1));
    }

    #[test]
    fn test_add_raw_below_one() {
        let err = (of(1) + -1).unwrap_err();
        assert!(err.is_validation());
        assert!((of(3) + i64::MIN).unwrap_err().is_validation());
    }

    #[test]
    fn test_add_raw_to_unbounded() {
        assert_eq!((unbounded() + -100).unwrap(), unbounded());
        assert_eq!((unbounded() + i64::MIN).unwrap(), unbounded());
    }

    #[test]
    fn test_sum() {
        let total: Option<OptionalBoundInteger> = vec![of(1), of(2), of(3)].into_iter().sum();
        assert_eq!(total, Some(of(6)));

        let total: Option<OptionalBoundInteger> =
            vec![of(1), unbounded(), of(3)].into_iter().sum();
        assert_eq!(total, Some(unbounded()));

        let total: Option<OptionalBoundInteger> =
            Vec::<OptionalBoundInteger>::new().into_iter().sum();
        assert_eq!(total, None);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(of(42).to_string(), "42");
        assert_eq!(unbounded().to_string(), "unbounded");
        assert_eq!(format!("{:>10}", unbounded()), " unbounded");
        for x in [of(1), of(42), unbounded()] {
            assert_eq!(x.to_string().parse::<OptionalBoundInteger>().unwrap(), x);
        }
        assert_eq!("UNBOUNDED".parse::<OptionalBoundInteger>().unwrap(), unbounded());
    }

    #[test]
    fn test_round_trip_above_i64() {
        let big = of(i64::MAX) + of(1);
        assert_eq!(big.int_value(), Ok(i64::MAX as u64 + 1));
        assert_eq!(big.to_string().parse::<OptionalBoundInteger>().unwrap(), big);

        let max = OptionalBoundInteger::Bounded(NonZeroU64::MAX);
        assert_eq!(max.to_string().parse::<OptionalBoundInteger>().unwrap(), max);
    }

    #[test]
    fn test_try_from_u64() {
        assert_eq!(OptionalBoundInteger::try_from(u64::MAX).unwrap().int_value(), Ok(u64::MAX));
        assert_eq!(
            OptionalBoundInteger::try_from(0u64).unwrap_err().constraint(),
            Some(&Constraint::MinValue("1".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = "0".parse::<OptionalBoundInteger>().unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::MinValue("1".to_string())));
        let err = "-3".parse::<OptionalBoundInteger>().unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::MinValue("1".to_string())));
        let err = "18446744073709551616".parse::<OptionalBoundInteger>().unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::NotAnInteger));
        let err = "lots".parse::<OptionalBoundInteger>().unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::NotAnInteger));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(OptionalBoundInteger::default(), unbounded());
        assert_eq!(OptionalBoundInteger::from(NonZeroU64::new(7).unwrap()), of(7));
        assert_eq!(OptionalBoundInteger::from(None::<NonZeroU64>), unbounded());
        assert_eq!(of(7).as_option(), Some(7));
        assert_eq!(unbounded().to_json(), None);
    }
}
