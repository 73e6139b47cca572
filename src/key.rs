//! Capability keys for gated construction
//!
//! A [`PrivateKey`] lets a type restrict construction to its own factory
//! functions. The type keeps one key in a private `static` and its constructor
//! asks the caller to present a key; only the exact same key passes.
//!
//! Keys compare by identity. Every key receives a process-unique id when it is
//! created, keys cannot be cloned, and their fields are private, so a key
//! cannot be forged from outside the module that owns it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::LazyLock;
//! use boundkit::{AuthorizationError, PrivateKey};
//!
//! static TICKET_KEY: LazyLock<PrivateKey> = LazyLock::new(PrivateKey::new);
//!
//! pub struct Ticket {
//!     seat: u32,
//! }
//!
//! impl Ticket {
//!     fn new(seat: u32, key: &PrivateKey) -> Result<Self, AuthorizationError> {
//!         TICKET_KEY.verify(key, None, None)?;
//!         Ok(Self { seat })
//!     }
//!
//!     pub fn issue(seat: u32) -> Self {
//!         Self::new(seat, &TICKET_KEY).expect("own key always verifies")
//!     }
//! }
//!
//! assert_eq!(Ticket::issue(7).seat, 7);
//! assert!(Ticket::new(7, &PrivateKey::new()).is_err());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::AuthorizationError;
use crate::validate::validate;

static NEXT_KEY_ID: AtomicU64 = AtomicU64::new(1);

const DEFAULT_NAME: &str = "key";
const DEFAULT_MESSAGE: &str = "Invalid call to private method";

/// An unforgeable capability token.
///
/// See the [module documentation](self) for the usage pattern.
pub struct PrivateKey {
    id: u64,
    name: &'static str,
    message: &'static str,
}

impl PrivateKey {
    /// Create a fresh key, distinct from every other key.
    ///
    /// Failures are reported under the name `"key"` with the message
    /// `"Invalid call to private method"`.
    pub fn new() -> Self {
        Self::named(DEFAULT_NAME, DEFAULT_MESSAGE)
    }

    /// Create a fresh key with its own default name and message.
    pub fn named(name: &'static str, message: &'static str) -> Self {
        Self {
            id: NEXT_KEY_ID.fetch_add(1, Ordering::Relaxed),
            name,
            message,
        }
    }

    /// Check that `candidate` is this very key.
    ///
    /// `name` and `message` override the key's defaults in the returned error.
    pub fn verify(
        &self,
        candidate: &PrivateKey,
        name: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), AuthorizationError> {
        self.verify_presented(Some(candidate), name, message)
    }

    /// Like [`PrivateKey::verify`], where `None` means no key was presented.
    pub(crate) fn verify_presented(
        &self,
        candidate: Option<&PrivateKey>,
        name: Option<&str>,
        message: Option<&str>,
    ) -> Result<(), AuthorizationError> {
        let presented = candidate.map(|key| key.id);
        let context = name.unwrap_or(self.name);
        let message = message.unwrap_or(self.message);

        validate(context, &presented)
            .equals(&Some(self.id))
            .help(message)
            .finish()
            .map_err(|_| {
                #[cfg(feature = "tracing")]
                tracing::warn!(context, "refused construction without a matching key");
                AuthorizationError {
                    context: context.to_string(),
                    message: message.to_string(),
                }
            })
    }

    /// True if `other` is this very key.
    pub fn is(&self, other: &PrivateKey) -> bool {
        self.id == other.id
    }
}

impl Default for PrivateKey {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for PrivateKey {}

// The id stays out of Debug output.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
