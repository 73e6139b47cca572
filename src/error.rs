//! Error types for bounded value construction
//!
//! Every failure in this crate is one of four kinds:
//!
//! - [`ConfigurationError`]: a bound declaration is inconsistent. Raised when a
//!   type or descriptor is declared, never while constructing instances of a
//!   well-declared type.
//! - [`ValidationError`]: a value violates a numeric, length, pattern or custom
//!   constraint.
//! - [`AuthorizationError`]: a gated type was constructed without its key.
//! - [`StateError`]: a variant-specific field was read on the wrong variant.
//!
//! [`BoundError`] wraps all four so constructors can return a single type.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

/// Result type alias for bounded value operations
pub type Result<T> = std::result::Result<T, BoundError>;

/// An inconsistent bound declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Integer range with `min > max`
    #[error("invalid bounds: min {min} is greater than max {max}")]
    InvertedBounds {
        /// Declared minimum
        min: i64,
        /// Declared maximum
        max: i64,
    },

    /// String shape with `min_length > max_length`
    #[error("invalid lengths: min_length {min_length} is greater than max_length {max_length}")]
    InvertedLengths {
        /// Declared minimum length
        min_length: usize,
        /// Declared maximum length
        max_length: usize,
    },

    /// Pattern that does not compile
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Pattern source
        pattern: String,
        /// Compiler message
        reason: String,
    },
}

/// The constraint a [`ValidationError`] reports as violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Value must equal the rendered expectation
    Equals(String),
    /// Value must be at least this
    MinValue(String),
    /// Value must be at most this
    MaxValue(String),
    /// Length must be at least this
    MinLength(usize),
    /// Length must be at most this
    MaxLength(usize),
    /// Value must fully match this pattern
    Pattern(String),
    /// Caller-supplied check, with its description
    Custom(String),
    /// Text is not a base-10 integer
    NotAnInteger,
    /// Arithmetic left the range of `i64`
    Overflow,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Equals(expected) => write!(f, "must equal {}", expected),
            Constraint::MinValue(min) => write!(f, "must be >= {}", min),
            Constraint::MaxValue(max) => write!(f, "must be <= {}", max),
            Constraint::MinLength(n) => write!(f, "length must be >= {}", n),
            Constraint::MaxLength(n) => write!(f, "length must be <= {}", n),
            Constraint::Pattern(p) => write!(f, "must match /{}/", p),
            Constraint::Custom(desc) => write!(f, "{}", desc),
            Constraint::NotAnInteger => f.write_str("must be an integer"),
            Constraint::Overflow => f.write_str("arithmetic overflow"),
        }
    }
}

/// A value rejected by a constraint.
///
/// Carries the owning type, the field name, the offending value (as rendered by
/// `Debug`) and the violated [`Constraint`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}.{field}: {value} {constraint}{}", help_suffix(.help))]
pub struct ValidationError {
    /// Type that rejected the value
    pub type_name: Cow<'static, str>,
    /// Field name
    pub field: String,
    /// The rejected value
    pub value: String,
    /// Which constraint failed
    pub constraint: Constraint,
    /// Optional help message
    pub help: Option<String>,
}

fn help_suffix(help: &Option<String>) -> String {
    match help {
        Some(msg) => format!(" ({})", msg),
        None => String::new(),
    }
}

impl ValidationError {
    /// Attach the name of the type that owns the field.
    pub fn in_type(mut self, type_name: impl Into<Cow<'static, str>>) -> Self {
        self.type_name = type_name.into();
        self
    }
}

/// A gated constructor called without the right key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {message}")]
pub struct AuthorizationError {
    /// Name of the key parameter being checked
    pub context: String,
    /// Explanation shown to the caller
    pub message: String,
}

/// A field read on a variant where it has no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{type_name}: {message}")]
pub struct StateError {
    /// Type whose state was wrong
    pub type_name: &'static str,
    /// What was attempted
    pub message: &'static str,
}

/// Any failure produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundError {
    /// See [`ConfigurationError`]
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// See [`ValidationError`]
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// See [`AuthorizationError`]
    #[error("authorization error: {0}")]
    Authorization(#[from] AuthorizationError),

    /// See [`StateError`]
    #[error("state error: {0}")]
    State(#[from] StateError),
}

impl BoundError {
    /// True for [`BoundError::Configuration`]
    pub fn is_configuration(&self) -> bool {
        matches!(self, BoundError::Configuration(_))
    }

    /// True for [`BoundError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, BoundError::Validation(_))
    }

    /// True for [`BoundError::Authorization`]
    pub fn is_authorization(&self) -> bool {
        matches!(self, BoundError::Authorization(_))
    }

    /// True for [`BoundError::State`]
    pub fn is_state(&self) -> bool {
        matches!(self, BoundError::State(_))
    }

    /// The violated constraint, if this is a validation failure.
    pub fn constraint(&self) -> Option<&Constraint> {
        match self {
            BoundError::Validation(err) => Some(&err.constraint),
            _ => None,
        }
    }
}

/// Tag a primitive validation failure with its owning type.
pub(crate) fn rejected(type_name: impl Into<Cow<'static, str>>, err: ValidationError) -> BoundError {
    let err = err.in_type(type_name);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        type_name = %err.type_name,
        value = %err.value,
        constraint = %err.constraint,
        "rejected value"
    );
    BoundError::Validation(err)
}
