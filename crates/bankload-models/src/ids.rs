//! Strongly-typed ID newtypes for gateway entities.
//!
//! The gateway hands out identifiers as opaque strings. Each entity gets its
//! own newtype so that a `CardId` can never be passed where an `AccountId` is
//! expected, even though both are strings on the wire.
//!
//! # Example
//!
//! ```ignore
//! use bankload_models::ids::{AccountId, UserId};
//!
//! fn open_account(user_id: &UserId) { /* ... */ }
//!
//! let user_id = UserId::from("8c0f6a52-4a3e-4a4b-8a8e-1f0e9f1b2c3d");
//! open_account(&user_id);        // OK
//! // open_account(&AccountId::new()); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyIdError {
    kind: &'static str,
}

impl fmt::Display for EmptyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.kind)
    }
}

impl std::error::Error for EmptyIdError {}

/// Macro to define a strongly-typed, string-backed ID newtype.
///
/// Serializes transparently as the inner string, so persisted seed results and
/// gateway payloads carry plain identifiers.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID (UUID v4 rendered as a string).
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wrap an identifier returned by the gateway.
            #[inline]
            pub fn from_string(id: String) -> Self {
                Self(id)
            }

            /// Borrow the identifier as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Get the inner string value.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = EmptyIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.is_empty() {
                    return Err(EmptyIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for gateway users.
    UserId
);

define_id!(
    /// Strongly-typed ID for accounts of any kind.
    AccountId
);

define_id!(
    /// Strongly-typed ID for physical and virtual cards.
    CardId
);

define_id!(
    /// Strongly-typed ID for operations (top-ups, purchases, transfers, ...).
    OperationId
);
