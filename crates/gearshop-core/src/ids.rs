//! Newtype IDs for catalog records.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ReviewId where a ProductId is expected. The static
//! dataset uses small authored integer ids, so the newtypes wrap u32.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID from a raw integer.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw integer value.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(ReviewId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(7);
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(42);
        assert_eq!(format!("{}", id), "42");
    }

    #[test]
    fn test_id_from_u32() {
        let id: ReviewId = 3.into();
        assert_eq!(id, ReviewId::new(3));
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ProductId::new(1), ProductId::new(1));
        assert_ne!(ProductId::new(1), ProductId::new(2));
    }
}
