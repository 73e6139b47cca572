//! Runtime string declarations and the per-type declaration cache

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use regex::Regex;

use super::{StringBounds, MATCH_ALL};
use crate::error::{AuthorizationError, ConfigurationError, Constraint, ValidationError};
use crate::key::PrivateKey;
use crate::validate::validate;

/// A validated string declaration: length range, pattern and optional key.
///
/// ```rust
/// use boundkit::StringShape;
///
/// let code = StringShape::new(2, 2, "[A-Z]*").unwrap();
/// assert!(code.check("country", "IT").is_ok());
/// assert!(code.check("country", "it").is_err());
/// assert!(code.check("country", "ITA").is_err());
///
/// assert!(StringShape::new(3, 1, ".*").is_err());
/// assert!(StringShape::new(0, 5, "([a-z]").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringShape {
    min_length: usize,
    max_length: usize,
    source: String,
    matcher: Option<Regex>,
    key: Option<&'static PrivateKey>,
}

impl StringShape {
    /// Declare a shape. Fails if `min_length > max_length` or if `pattern`
    /// does not compile.
    ///
    /// The pattern must match the whole string. [`MATCH_ALL`] is never
    /// evaluated.
    pub fn new(
        min_length: usize,
        max_length: usize,
        pattern: &str,
    ) -> Result<Self, ConfigurationError> {
        if min_length > max_length {
            return Err(ConfigurationError::InvertedLengths {
                min_length,
                max_length,
            });
        }

        let matcher = if pattern == MATCH_ALL {
            None
        } else {
            let anchored = format!("^(?:{})$", pattern);
            let regex = Regex::new(&anchored).map_err(|e| ConfigurationError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;
            Some(regex)
        };

        Ok(Self {
            min_length,
            max_length,
            source: pattern.to_string(),
            matcher,
            key: None,
        })
    }

    /// Require `key` for every construction.
    pub fn with_key(mut self, key: &'static PrivateKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Build the shape a [`StringBounds`] marker declares.
    pub fn declared<B: StringBounds>() -> Result<Self, ConfigurationError> {
        let shape = Self::new(B::MIN_LENGTH, B::MAX_LENGTH, B::PATTERN)?;
        Ok(match B::key() {
            Some(key) => shape.with_key(key),
            None => shape,
        })
    }

    /// Shortest accepted length, in characters
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Longest accepted length, in characters
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Pattern source as declared
    pub fn pattern(&self) -> &str {
        &self.source
    }

    /// True if construction requires a key
    pub fn is_gated(&self) -> bool {
        self.key.is_some()
    }

    /// Check the presented key. Ungated shapes accept anything, including
    /// no key at all.
    pub fn authorize(&self, presented: Option<&PrivateKey>) -> Result<(), AuthorizationError> {
        match self.key {
            None => Ok(()),
            Some(key) => key.verify_presented(presented, None, None),
        }
    }

    /// Check length, then pattern.
    ///
    /// A pattern failure reports the pattern as declared, without anchors.
    pub fn check(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        let check = validate(field, value)
            .min_len(self.min_length)
            .max_len(self.max_length);
        match &self.matcher {
            Some(regex) => check.pattern(regex).finish().map_err(|mut err| {
                if let Constraint::Pattern(source) = &mut err.constraint {
                    source.clone_from(&self.source);
                }
                err
            }),
            None => check.finish(),
        }
    }
}

static DECLARED: LazyLock<RwLock<HashMap<TypeId, Arc<StringShape>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The cached shape for `B`, declaring it on first use.
///
/// Failed declarations are not cached, so every call reports the error again.
pub(crate) fn shape_of<B: StringBounds>() -> Result<Arc<StringShape>, ConfigurationError> {
    let id = TypeId::of::<B>();

    // Entries are inserted whole, so a poisoned lock still guards a valid map.
    if let Some(shape) = DECLARED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
    {
        return Ok(Arc::clone(shape));
    }

    let shape = Arc::new(StringShape::declared::<B>()?);
    #[cfg(feature = "tracing")]
    tracing::debug!(
        type_name = %B::type_name(),
        min_length = shape.min_length,
        max_length = shape.max_length,
        pattern = %shape.source,
        gated = shape.is_gated(),
        "declared bounded string"
    );

    let mut declared = DECLARED.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(declared.entry(id).or_insert(shape)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_lengths() {
        let err = StringShape::new(5, 4, MATCH_ALL).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvertedLengths {
                min_length: 5,
                max_length: 4
            }
        );
    }

    #[test]
    fn test_invalid_pattern() {
        match StringShape::new(0, 4, "(").unwrap_err() {
            ConfigurationError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("Expected invalid pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_match_all_is_not_compiled() {
        let shape = StringShape::new(0, 3, MATCH_ALL).unwrap();
        assert!(shape.matcher.is_none());
        assert!(shape.check("s", "a\nb").is_ok());
        assert_eq!(shape.pattern(), ".*");
    }

    #[test]
    fn test_pattern_matches_whole_string() {
        let shape = StringShape::new(0, 10, "[0-9]+").unwrap();
        assert!(shape.check("s", "123").is_ok());
        let err = shape.check("s", "12a").unwrap_err();
        assert_eq!(err.constraint, Constraint::Pattern("[0-9]+".to_string()));
        assert!(shape.check("s", "a123").is_err());
    }

    #[test]
    fn test_alternation_is_anchored() {
        let shape = StringShape::new(0, 10, "ab|cd").unwrap();
        assert!(shape.check("s", "ab").is_ok());
        assert!(shape.check("s", "abx").is_err());
        assert!(shape.check("s", "xcd").is_err());
    }

    #[test]
    fn test_length_before_pattern() {
        let shape = StringShape::new(2, 2, "[A-Z]*").unwrap();
        let err = shape.check("s", "abc").unwrap_err();
        assert_eq!(err.constraint, Constraint::MaxLength(2));
    }

    #[test]
    fn test_authorize() {
        static KEY: LazyLock<PrivateKey> = LazyLock::new(PrivateKey::new);

        let open = StringShape::new(0, 3, MATCH_ALL).unwrap();
        assert!(open.authorize(None).is_ok());

        let gated = open.clone().with_key(&KEY);
        assert!(gated.is_gated());
        assert!(gated.authorize(Some(&*KEY)).is_ok());
        assert!(gated.authorize(None).is_err());
        assert!(gated.authorize(Some(&PrivateKey::new())).is_err());
    }
}
