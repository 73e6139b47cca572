//! Declaration macros
//!
//! Both macros write a marker type, its bounds trait impl and a type alias.
//! Inverted bounds are rejected at compile time.

/// Declare a bounded integer type.
///
/// ```rust
/// use boundkit::bounded_integer;
///
/// bounded_integer! {
///     /// Share of a whole.
///     pub Percent(PercentBounds) { min: 0, max: 100 }
/// }
///
/// bounded_integer! {
///     /// An even number of seats.
///     pub Seats(SeatsBounds) {
///         min: 2,
///         max: 12,
///         check: |n| if n % 2 == 0 { Ok(()) } else { Err("must be even".to_string()) },
///     }
/// }
///
/// assert_eq!(Percent::new(42).unwrap().get(), 42);
/// assert!(Seats::new(4).is_ok());
/// assert!(Seats::new(5).is_err());
/// ```
///
/// An inverted range does not compile:
///
/// ```compile_fail
/// use boundkit::bounded_integer;
///
/// bounded_integer! {
///     pub Broken(BrokenBounds) { min: 20, max: 10 }
/// }
/// ```
#[macro_export]
macro_rules! bounded_integer {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($bounds:ident) {
            min: $min:expr,
            max: $max:expr
            $(, check: $check:expr)?
            $(,)?
        }
    ) => {
        #[doc = concat!("Bounds of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $bounds;

        const _: () = assert!($min <= $max);

        impl $crate::IntegerBounds for $bounds {
            const NAME: &'static str = stringify!($name);
            const MIN: i64 = $min;
            const MAX: i64 = $max;

            $(
                fn check(value: i64) -> ::std::result::Result<(), ::std::string::String> {
                    let check: fn(i64) -> ::std::result::Result<(), ::std::string::String> = $check;
                    check(value)
                }
            )?
        }

        $(#[$meta])*
        $vis type $name = $crate::BoundedInteger<$bounds>;
    };
}

/// Declare a bounded string type.
///
/// `pattern`, `key` and `check` are optional and must appear in that order.
/// Supplying `key` makes the type gated.
///
/// ```rust
/// use std::sync::LazyLock;
/// use boundkit::{bounded_string, PrivateKey};
///
/// bounded_string! {
///     /// Two upper-case letters.
///     pub CountryCode(CountryCodeBounds) {
///         min_length: 2,
///         max_length: 2,
///         pattern: "[A-Z]*",
///     }
/// }
///
/// static TAG_KEY: LazyLock<PrivateKey> = LazyLock::new(PrivateKey::new);
///
/// bounded_string! {
///     pub Tag(TagBounds) {
///         min_length: 1,
///         max_length: 16,
///         key: &*TAG_KEY,
///         check: |s| if s.starts_with('-') { Err("no leading dash".to_string()) } else { Ok(()) },
///     }
/// }
///
/// assert!(CountryCode::new("IT").is_ok());
/// assert!(Tag::new("rust").unwrap_err().is_authorization());
/// assert!(Tag::with_key("rust", &*TAG_KEY).is_ok());
/// assert!(Tag::with_key("-rust", &*TAG_KEY).unwrap_err().is_validation());
/// ```
#[macro_export]
macro_rules! bounded_string {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($bounds:ident) {
            min_length: $min:expr,
            max_length: $max:expr
            $(, pattern: $pattern:expr)?
            $(, key: $key:expr)?
            $(, check: $check:expr)?
            $(,)?
        }
    ) => {
        #[doc = concat!("Bounds of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $bounds;

        const _: () = assert!($min <= $max);

        impl $crate::StringBounds for $bounds {
            const NAME: &'static str = stringify!($name);
            const MIN_LENGTH: usize = $min;
            const MAX_LENGTH: usize = $max;
            $(const PATTERN: &'static str = $pattern;)?

            $(
                fn key() -> ::std::option::Option<&'static $crate::PrivateKey> {
                    ::std::option::Option::Some($key)
                }
            )?

            $(
                fn check(value: &str) -> ::std::result::Result<(), ::std::string::String> {
                    let check: fn(&str) -> ::std::result::Result<(), ::std::string::String> = $check;
                    check(value)
                }
            )?
        }

        $(#[$meta])*
        $vis type $name = $crate::BoundedString<$bounds>;
    };
}
