//! Error types for the registry store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant carries the offending path/name/type so a caller can render
//! a user-facing message without re-deriving context.

use crate::types::ValueType;
use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the registry store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Path string is malformed (empty segment, illegal name)
    #[error("invalid path {path:?}: {reason}")]
    InvalidPath {
        /// The offending path string
        path: String,
        /// What rule the path broke
        reason: String,
    },

    /// A path does not resolve to a key
    #[error("key not found: no subkey {segment:?} while resolving {path:?}")]
    KeyNotFound {
        /// The full path being resolved
        path: String,
        /// The first segment that failed to resolve
        segment: String,
    },

    /// A value name does not exist under the resolved key
    #[error("value not found: {name:?} under key {path:?}")]
    ValueNotFound {
        /// Path of the owning key
        path: String,
        /// The missing value name
        name: String,
    },

    /// Name collision on create or rename
    #[error("name conflict: {name:?} already exists under {path:?}")]
    Conflict {
        /// Path of the parent (for keys) or owning key (for values)
        path: String,
        /// The colliding name
        name: String,
    },

    /// Value text failed its type-specific validation rule
    #[error("invalid {value_type} data {input:?}: {reason}")]
    Validation {
        /// The type whose rule was violated
        value_type: ValueType,
        /// The rejected input text
        input: String,
        /// What rule the input broke
        reason: String,
    },

    /// Structurally disallowed operation (e.g. deleting the root)
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Search query is empty
    #[error("search query must not be empty")]
    InvalidQuery,
}

impl Error {
    /// True for either not-found variant (key or value)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. } | Error::ValueNotFound { .. })
    }
}
