//! Newtype wrappers for domain entity identifiers.
//!
//! Identifiers in the asset library are opaque strings: assets imported
//! from Lightroom or Google Drive keep whatever key the upstream system
//! assigned, while locally created assets are minted as UUID v4 strings.
//! Using distinct types prevents accidentally passing a `ProjectId` where
//! an `AssetId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around an opaque `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Mint a new random identifier (UUID v4 rendered as a string).
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Create an identifier from an existing string key.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the inner string.
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for an asset (image, file, or folder).
    AssetId
);

define_id!(
    /// Unique identifier for a project whose library the assets belong to.
    ProjectId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = AssetId::generate();
        let b = AssetId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = AssetId::new("lr-4821");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"lr-4821\"");
        let back: AssetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_str_roundtrip() {
        let id = AssetId::from("gd-folder-7");
        assert_eq!(id.as_str(), "gd-folder-7");
        assert_eq!(String::from(id), "gd-folder-7");
    }
}
