//! Newtype IDs for type-safe identifiers.
//!
//! Newtypes keep the different ID kinds from being mixed up, e.g. passing a
//! ProductId where a UserId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs with a generation prefix.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(format!("{}_{}", $prefix, generate_suffix()))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "prod");
define_id!(CartId, "cart");
define_id!(LineItemId, "item");
define_id!(UserId, "user");
define_id!(AddressId, "addr");
define_id!(IntentId, "pi");

/// Generate a unique suffix from the wall clock and a process-wide counter.
fn generate_suffix() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{:x}{:04x}", nanos, counter & 0xffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod_purse");
        assert_eq!(id.as_str(), "prod_purse");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let id1 = CartId::generate();
        let id2 = CartId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_generation_prefix() {
        let id = UserId::generate();
        assert!(id.as_str().starts_with("user_"));
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod_1".into();
        assert_eq!(id.as_str(), "prod_1");
    }

    #[test]
    fn test_id_display() {
        let id = IntentId::new("pi_123");
        assert_eq!(format!("{}", id), "pi_123");
    }
}
