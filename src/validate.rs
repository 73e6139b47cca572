//! The check-and-fail primitive used by every bounded type
//!
//! [`validate`] starts a [`Check`] on a named value. Constraints are added with
//! builder methods and evaluated in the order they were added; the first one that
//! fails becomes the [`ValidationError`].
//!
//! # Example
//!
//! ```rust
//! use boundkit::validate::validate;
//!
//! assert!(validate("age", &42).min_value(0).max_value(150).finish().is_ok());
//!
//! let err = validate("age", &-1).min_value(0).finish().unwrap_err();
//! assert_eq!(err.field, "age");
//! ```

use std::fmt;

use regex::Regex;

use crate::error::{Constraint, ValidationError};

/// Length as the constraints understand it.
///
/// Strings measure characters, not bytes; collections measure elements.
pub trait Measure {
    /// Number of units in the value
    fn measure(&self) -> usize;
}

impl Measure for str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measure for [T] {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self) -> usize {
        (**self).measure()
    }
}

/// A pending check on one named value.
///
/// Created by [`validate`]. Nothing is reported until [`Check::finish`].
#[must_use = "a Check does nothing until finish() is called"]
pub struct Check<'a, T: ?Sized> {
    field: &'a str,
    value: &'a T,
    failure: Option<Constraint>,
    help: Option<String>,
}

impl<T: ?Sized> fmt::Debug for Check<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("field", &self.field)
            .field("failure", &self.failure)
            .finish()
    }
}

/// Start checking `value`, reported under `field`.
pub fn validate<'a, T: ?Sized>(field: &'a str, value: &'a T) -> Check<'a, T> {
    Check {
        field,
        value,
        failure: None,
        help: None,
    }
}

impl<T: ?Sized> Check<'_, T> {
    fn require(
        mut self,
        ok: impl FnOnce(&T) -> bool,
        constraint: impl FnOnce() -> Constraint,
    ) -> Self {
        if self.failure.is_none() && !ok(self.value) {
            self.failure = Some(constraint());
        }
        self
    }

    /// Value must equal `expected`.
    pub fn equals<U>(self, expected: &U) -> Self
    where
        T: PartialEq<U>,
        U: fmt::Debug + ?Sized,
    {
        self.require(|v| v == expected, || Constraint::Equals(format!("{:?}", expected)))
    }

    /// Value must be `>= min`.
    pub fn min_value(self, min: T) -> Self
    where
        T: PartialOrd + fmt::Display + Sized,
    {
        let rendered = min.to_string();
        self.require(|v| *v >= min, || Constraint::MinValue(rendered))
    }

    /// Value must be `<= max`.
    pub fn max_value(self, max: T) -> Self
    where
        T: PartialOrd + fmt::Display + Sized,
    {
        let rendered = max.to_string();
        self.require(|v| *v <= max, || Constraint::MaxValue(rendered))
    }

    /// Length must be at least `min`.
    pub fn min_len(self, min: usize) -> Self
    where
        T: Measure,
    {
        self.require(|v| v.measure() >= min, || Constraint::MinLength(min))
    }

    /// Length must be at most `max`.
    pub fn max_len(self, max: usize) -> Self
    where
        T: Measure,
    {
        self.require(|v| v.measure() <= max, || Constraint::MaxLength(max))
    }

    /// The whole value must match `pattern`.
    ///
    /// The regex should already be anchored; see
    /// [`StringShape`](crate::StringShape) for how bounded strings anchor theirs.
    pub fn pattern(self, pattern: &Regex) -> Self
    where
        T: AsRef<str>,
    {
        self.require(
            |v| pattern.is_match(v.as_ref()),
            || Constraint::Pattern(pattern.as_str().to_string()),
        )
    }

    /// Value must satisfy `predicate`.
    pub fn custom<F>(self, predicate: F, description: impl Into<String>) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.require(predicate, || Constraint::Custom(description.into()))
    }

    /// Value must satisfy a check that explains its own failure.
    pub fn custom_result<F>(mut self, check: F) -> Self
    where
        F: FnOnce(&T) -> Result<(), String>,
    {
        if self.failure.is_none() {
            if let Err(reason) = check(self.value) {
                self.failure = Some(Constraint::Custom(reason));
            }
        }
        self
    }

    /// Message appended to the error if any constraint fails.
    pub fn help(mut self, message: impl Into<String>) -> Self {
        self.help = Some(message.into());
        self
    }

    /// Report the first failed constraint, if any.
    pub fn finish(self) -> Result<(), ValidationError>
    where
        T: fmt::Debug,
    {
        match self.failure {
            None => Ok(()),
            Some(constraint) => Err(ValidationError {
                type_name: "value".into(),
                field: self.field.to_string(),
                value: format!("{:?}", self.value),
                constraint,
                help: self.help,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_silently() {
        assert!(validate("n", &5).min_value(1).max_value(10).finish().is_ok());
    }

    #[test]
    fn test_min_value() {
        let err = validate("n", &0).min_value(1).finish().unwrap_err();
        assert_eq!(err.field, "n");
        assert_eq!(err.value, "0");
        assert_eq!(err.constraint, Constraint::MinValue("1".to_string()));
    }

    #[test]
    fn test_max_value() {
        let err = validate("n", &11).max_value(10).finish().unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxValue("10".to_string()));
    }

    #[test]
    fn test_first_failure_wins() {
        let err = validate("s", "toolong")
            .max_len(3)
            .custom(|_| false, "never")
            .finish()
            .unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLength(3));
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(validate("s", "héé").max_len(3).finish().is_ok());
        assert!(validate("s", "héé").min_len(4).finish().is_err());
    }

    #[test]
    fn test_length_of_vec() {
        let v = vec![1, 2, 3];
        assert!(validate("v", &v).min_len(3).max_len(3).finish().is_ok());
    }

    #[test]
    fn test_pattern() {
        let re = Regex::new("^(?:[A-Z]*)$").unwrap();
        assert!(validate("s", "ABC").pattern(&re).finish().is_ok());
        let err = validate("s", "AbC").pattern(&re).finish().unwrap_err();
        assert!(matches!(err.constraint, Constraint::Pattern(_)));
        assert_eq!(err.value, "\"AbC\"");
    }

    #[test]
    fn test_equals() {
        assert!(validate("x", &3).equals(&3).finish().is_ok());
        let err = validate("x", &3).equals(&4).finish().unwrap_err();
        assert_eq!(err.constraint, Constraint::Equals("4".to_string()));
    }

    #[test]
    fn test_custom_result_keeps_message() {
        let err = validate("n", &3)
            .custom_result(|n| {
                if n % 2 == 0 {
                    Ok(())
                } else {
                    Err("must be even".to_string())
                }
            })
            .finish()
            .unwrap_err();
        assert_eq!(err.constraint, Constraint::Custom("must be even".to_string()));
    }

    #[test]
    fn test_custom_result_skipped_after_failure() {
        let err = validate("n", &3)
            .max_value(2)
            .custom_result(|_| Err("unreachable".to_string()))
            .finish()
            .unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxValue("2".to_string()));
    }

    #[test]
    fn test_help_message() {
        let err = validate("key", &1)
            .equals(&2)
            .help("Invalid call to private method")
            .finish()
            .unwrap_err();
        assert_eq!(err.help.as_deref(), Some("Invalid call to private method"));
    }
}
