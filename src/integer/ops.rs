//! Arithmetic on bounded integers
//!
//! All results are rebuilt with [`BoundedInteger::new`]; leaving the declared
//! range, or the range of `i64`, is a [`BoundError::Validation`].

use std::ops::{Add, Mul, Neg};

use super::{BoundedInteger, IntegerBounds};
use crate::error::{rejected, BoundError, Constraint, ValidationError};

fn overflow<B: IntegerBounds>(lhs: i64, op: char, rhs: i64) -> BoundError {
    rejected(
        B::type_name(),
        ValidationError {
            type_name: B::type_name(),
            field: "value".to_string(),
            value: format!("{} {} {}", lhs, op, rhs),
            constraint: Constraint::Overflow,
            help: None,
        },
    )
}

impl<B: IntegerBounds> BoundedInteger<B> {
    /// Add a raw integer, re-validating the sum.
    ///
    /// ```rust
    /// use boundkit::{Between, BoundedInteger};
    ///
    /// type Dice = BoundedInteger<Between<1, 6>>;
    ///
    /// let four = Dice::new(4).unwrap();
    /// assert_eq!(four.checked_add(2).unwrap().get(), 6);
    /// assert!(four.checked_add(3).is_err());
    /// ```
    pub fn checked_add(self, rhs: i64) -> Result<Self, BoundError> {
        let sum = self
            .value
            .checked_add(rhs)
            .ok_or_else(|| overflow::<B>(self.value, '+', rhs))?;
        Self::new(sum)
    }

    /// Multiply by a raw integer, re-validating the product.
    pub fn checked_mul(self, rhs: i64) -> Result<Self, BoundError> {
        let product = self
            .value
            .checked_mul(rhs)
            .ok_or_else(|| overflow::<B>(self.value, '*', rhs))?;
        Self::new(product)
    }

    /// Multiply by −1.
    pub fn negate(self) -> Result<Self, BoundError> {
        self.checked_mul(-1)
    }
}

impl<B: IntegerBounds> Add for BoundedInteger<B> {
    type Output = Result<Self, BoundError>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs.value)
    }
}

impl<B: IntegerBounds> Add<i64> for BoundedInteger<B> {
    type Output = Result<Self, BoundError>;

    fn add(self, rhs: i64) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl<B: IntegerBounds> Mul for BoundedInteger<B> {
    type Output = Result<Self, BoundError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs.value)
    }
}

impl<B: IntegerBounds> Mul<i64> for BoundedInteger<B> {
    type Output = Result<Self, BoundError>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<B: IntegerBounds> Mul<BoundedInteger<B>> for i64 {
    type Output = Result<BoundedInteger<B>, BoundError>;

    fn mul(self, rhs: BoundedInteger<B>) -> Self::Output {
        rhs.checked_mul(self)
    }
}

impl<B: IntegerBounds> Neg for BoundedInteger<B> {
    type Output = Result<Self, BoundError>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::Between;

    type Small = BoundedInteger<Between<-10, 10>>;
    type Natural = BoundedInteger<Between<0, { i64::MAX }>>;

    fn small(v: i64) -> Small {
        Small::new(v).unwrap()
    }

    #[test]
    fn test_add_same_type() {
        assert_eq!((small(3) + small(4)).unwrap(), small(7));
    }

    #[test]
    fn test_add_raw() {
        assert_eq!((small(3) + 4).unwrap(), small(7));
        assert_eq!((small(3) + -5).unwrap(), small(-2));
    }

    #[test]
    fn test_add_out_of_range() {
        let err = (small(6) + small(6)).unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::MaxValue("10".to_string())));
    }

    #[test]
    fn test_mul() {
        assert_eq!((small(3) * small(3)).unwrap(), small(9));
        assert_eq!((small(3) * 2).unwrap(), small(6));
        assert_eq!((2i64 * small(3)).unwrap(), small(6));
        assert!((small(4) * 3).is_err());
    }

    #[test]
    fn test_neg() {
        assert_eq!((-small(7)).unwrap(), small(-7));
        assert_eq!(small(-10).negate().unwrap(), small(10));
    }

    #[test]
    fn test_neg_out_of_range() {
        type Positive = BoundedInteger<Between<1, 5>>;
        let err = (-Positive::new(3).unwrap()).unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::MinValue("1".to_string())));
    }

    #[test]
    fn test_overflow_is_validation_error() {
        let big = Natural::new(i64::MAX).unwrap();
        let err = (big + 1).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.constraint(), Some(&Constraint::Overflow));

        let err = (big * 2).unwrap_err();
        assert_eq!(err.constraint(), Some(&Constraint::Overflow));
    }

    #[test]
    fn test_operands_unchanged() {
        let a = small(2);
        let _ = a + 3;
        assert_eq!(a.get(), 2);
    }
}
