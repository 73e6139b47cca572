//! Serde support for bounded types (feature-gated)
//!
//! Values serialize as their wrapped primitive. Deserialization goes through
//! the same constructors as everything else, so invalid input is rejected.
//! Gated string types cannot be deserialized, because a deserializer has no
//! key to present.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use boundkit::{OptionalBoundInteger, Percentage};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Quota {
//!     share: Percentage,               // Validated on deserialize
//!     max_items: OptionalBoundInteger, // null means unbounded
//! }
//!
//! let quota: Quota = serde_json::from_str(r#"{"share": 50, "max_items": null}"#).unwrap();
//! assert!(quota.max_items.is_unbounded());
//!
//! let bad: Result<Quota, _> = serde_json::from_str(r#"{"share": 150, "max_items": 3}"#);
//! assert!(bad.is_err());
//! ```

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::integer::{BoundedInteger, IntegerBounds};
use crate::optional::OptionalBoundInteger;
use crate::string::{BoundedString, StringBounds};

impl<B: IntegerBounds> Serialize for BoundedInteger<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.get())
    }
}

impl<'de, B: IntegerBounds> Deserialize<'de> for BoundedInteger<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        BoundedInteger::new(value).map_err(serde::de::Error::custom)
    }
}

impl<B: StringBounds> Serialize for BoundedString<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, B: StringBounds> Deserialize<'de> for BoundedString<B> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        BoundedString::new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for OptionalBoundInteger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OptionalBoundInteger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(LimitVisitor)
    }
}

// Accepts null, the full u64 range, and negative integers (rejected by `of`).
struct LimitVisitor;

impl<'de> Visitor<'de> for LimitVisitor {
    type Value = OptionalBoundInteger;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a positive integer or null")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalBoundInteger::Unbounded)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionalBoundInteger::Unbounded)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_u64(self)
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
        OptionalBoundInteger::try_from(n).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
        OptionalBoundInteger::of(n).map_err(E::custom)
    }
}
