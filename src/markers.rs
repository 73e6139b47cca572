//! Ready-made declarations and aliases
//!
//! [`Between<MIN, MAX>`] and [`Length<MIN, MAX>`] declare anonymous bounds
//! through const generics, for cases that need no name, pattern or custom
//! check. Two aliases with the same parameters are the same type. Errors and
//! `Debug` output name them by their parameters, e.g. `Between<0, 23>`.
//!
//! ```rust
//! use boundkit::{Between, BoundedInteger, BoundedString, Length};
//!
//! type Hour = BoundedInteger<Between<0, 23>>;
//! type Initials = BoundedString<Length<2, 3>>;
//!
//! assert!(Hour::new(23).is_ok());
//! assert!(Hour::new(24).is_err());
//! assert!(Initials::new("JRR").is_ok());
//! assert!(Initials::new("J").is_err());
//! ```

use std::borrow::Cow;

use crate::integer::{BoundedInteger, IntegerBounds};
use crate::string::{BoundedString, StringBounds};

/// Integers in `[MIN, MAX]`
#[derive(Debug, Clone, Copy, Default)]
pub struct Between<const MIN: i64, const MAX: i64>;

impl<const MIN: i64, const MAX: i64> IntegerBounds for Between<MIN, MAX> {
    const NAME: &'static str = "Between";
    const MIN: i64 = MIN;
    const MAX: i64 = MAX;

    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Between<{}, {}>", MIN, MAX))
    }
}

/// Strings of `MIN` to `MAX` characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Length<const MIN: usize, const MAX: usize>;

impl<const MIN: usize, const MAX: usize> StringBounds for Length<MIN, MAX> {
    const NAME: &'static str = "Length";
    const MIN_LENGTH: usize = MIN;
    const MAX_LENGTH: usize = MAX;

    fn type_name() -> Cow<'static, str> {
        Cow::Owned(format!("Length<{}, {}>", MIN, MAX))
    }
}

/// 0 to 100 inclusive
pub type Percentage = BoundedInteger<Between<0, 100>>;

/// TCP/UDP port, 1 to 65535
pub type Port = BoundedInteger<Between<1, 65535>>;

/// At least one character, at most 255
pub type NonEmptyString = BoundedString<Length<1, 255>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert!(Percentage::new(0).is_ok());
        assert!(Percentage::new(100).is_ok());
        assert!(Percentage::new(-1).is_err());
        assert!(Percentage::new(101).is_err());
    }

    #[test]
    fn test_port() {
        assert!(Port::new(80).is_ok());
        assert!(Port::new(65535).is_ok());
        assert!(Port::new(0).is_err());
        assert!(Port::new(65536).is_err());
    }

    #[test]
    fn test_non_empty_string() {
        assert!(NonEmptyString::new("a").is_ok());
        assert!(NonEmptyString::new("").is_err());
        assert!(NonEmptyString::new("x".repeat(256)).is_err());
    }

    #[test]
    fn test_names() {
        let err = Percentage::new(101).unwrap_err().to_string();
        assert!(err.contains("Between<0, 100>.value: 101"));
        let err = NonEmptyString::new("").unwrap_err().to_string();
        assert!(err.contains("Length<1, 255>.value"));
        assert_eq!(format!("{:?}", Port::new(80).unwrap()), "Between<1, 65535>(80)");
    }
}
