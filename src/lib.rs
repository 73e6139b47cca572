//! # Boundkit
//!
//! Value types that carry their constraints.
//!
//! A bounded type is declared once, with a numeric range or a length range and
//! pattern, and every live instance is known to satisfy it. Construction is the
//! only way in, and every constructor validates.
//!
//! ## Quick Example
//!
//! ```rust
//! use boundkit::{bounded_integer, bounded_string, OptionalBoundInteger};
//!
//! bounded_integer! {
//!     /// Age of an adult, in years.
//!     pub Age(AgeBounds) { min: 18, max: 130 }
//! }
//!
//! bounded_string! {
//!     /// ISO 3166 alpha-2 country code.
//!     pub Country(CountryBounds) { min_length: 2, max_length: 2, pattern: "[A-Z]*" }
//! }
//!
//! let age = Age::new(42).unwrap();
//! assert_eq!(age.get(), 42);
//! assert!(Age::new(12).is_err());
//! assert!((age + 100).is_err());
//!
//! let country = Country::parse("NZ").unwrap();
//! assert_eq!(country, "NZ");
//! assert!(Country::new("nz").unwrap_err().is_validation());
//!
//! let limit = OptionalBoundInteger::of(5).unwrap() + OptionalBoundInteger::of_unbounded();
//! assert!(limit.is_unbounded());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every bounded type
//! - `tracing`: debug and warn events on declaration and rejection
//! - `proptest`: `Arbitrary` strategies for bounded integers
//! - `url`: [`url::compress_object_for_url`] and its inverse

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod error;
pub mod integer;
pub mod key;
pub mod markers;
pub mod optional;
pub mod string;
pub mod testing;
pub mod validate;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "url")]
pub mod url;

// Re-exports
pub use error::{
    AuthorizationError, BoundError, ConfigurationError, Constraint, Result, StateError,
    ValidationError,
};
pub use integer::{BoundedInteger, IntegerBounds, IntegerRange};
pub use key::PrivateKey;
pub use markers::{Between, Length, NonEmptyString, Percentage, Port};
pub use optional::OptionalBoundInteger;
pub use string::{BoundedString, StringBounds, StringShape, MATCH_ALL};
pub use validate::validate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{BoundError, Result};
    pub use crate::integer::{BoundedInteger, IntegerBounds};
    pub use crate::key::PrivateKey;
    pub use crate::optional::OptionalBoundInteger;
    pub use crate::string::{BoundedString, StringBounds};
    pub use crate::{bounded_integer, bounded_string};
}
