//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductHandle where a LineItemId is expected. All ids
//! are caller-chosen strings; nothing here is generated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A string-backed identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
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

define_id!(ProductHandle);
define_id!(VariantId);
define_id!(VesselId);
define_id!(LineItemId);

impl LineItemId {
    /// Composite id for a specific variant of a product.
    ///
    /// Two variants of the same product are distinct cart lines; the
    /// `"handle:variant"` form is the uniqueness contract callers rely on.
    pub fn for_variant(handle: &ProductHandle, variant: &VariantId) -> Self {
        Self(format!("{}:{}", handle.as_str(), variant.as_str()))
    }
}

impl From<&ProductHandle> for LineItemId {
    fn from(handle: &ProductHandle) -> Self {
        Self(handle.as_str().to_string())
    }
}

impl From<&VesselId> for LineItemId {
    fn from(id: &VesselId) -> Self {
        Self(id.as_str().to_string())
    }
}
