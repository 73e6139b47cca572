//! Testing utilities for bounded types
//!
//! Assertion macros that name the error kind a constructor should produce,
//! and, with the `proptest` feature, `Arbitrary` strategies that only generate
//! valid instances.
//!
//! # Assertion Macros
//!
//! ```rust
//! use boundkit::{assert_rejected, assert_valid, Percentage};
//!
//! let p = assert_valid!(Percentage::new(42));
//! assert_eq!(p.get(), 42);
//!
//! assert_rejected!(Percentage::new(101), Validation);
//! ```
//!
//! # Property Testing
//!
//! ```rust,ignore
//! use boundkit::Percentage;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn always_in_range(p in any::<Percentage>()) {
//!         prop_assert!((0..=100).contains(&p.get()));
//!     }
//! }
//! ```

/// Assert that a constructor succeeded, yielding the value.
///
/// # Example
///
/// ```rust
/// use boundkit::{assert_valid, Port};
///
/// let port = assert_valid!(Port::new(8080));
/// assert_eq!(port.get(), 8080);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(value) => value,
            ::std::result::Result::Err(e) => {
                panic!("Expected a valid value, got error: {}", e);
            }
        }
    };
}

/// Assert that a constructor failed with the given [`BoundError`](crate::BoundError)
/// kind: `Validation`, `Authorization`, `Configuration` or `State`.
///
/// # Example
///
/// ```rust
/// use boundkit::{assert_rejected, OptionalBoundInteger};
///
/// assert_rejected!(OptionalBoundInteger::of(0), Validation);
/// ```
#[macro_export]
macro_rules! assert_rejected {
    ($result:expr, $kind:ident) => {
        match $result {
            ::std::result::Result::Err($crate::BoundError::$kind(_)) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected {} error, got: {}", stringify!($kind), e);
            }
            ::std::result::Result::Ok(v) => {
                panic!("Expected {} error, got Ok: {:?}", stringify!($kind), v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{BoundedInteger, IntegerBounds, OptionalBoundInteger};

#[cfg(feature = "proptest")]
impl<B: IntegerBounds> Arbitrary for BoundedInteger<B> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (B::MIN..=B::MAX)
            .prop_filter_map("rejected by custom check", |v| BoundedInteger::new(v).ok())
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for OptionalBoundInteger {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => (1..=u64::MAX)
                .prop_filter_map("zero", std::num::NonZeroU64::new)
                .prop_map(OptionalBoundInteger::Bounded),
            1 => Just(OptionalBoundInteger::Unbounded),
        ]
        .boxed()
    }
}
