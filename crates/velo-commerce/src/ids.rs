//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a CategoryId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate newtype ID structs over `i64`.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an integer.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the inner integer value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self)
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(CategoryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "7".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert!("not-a-number".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        let id = CategoryId::new(3);
        assert_eq!(format!("{}", id), "3");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::new(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }
}
