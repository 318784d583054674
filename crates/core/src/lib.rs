//! Core types for reghive
//!
//! This crate defines the foundational types used throughout the system:
//! - KeyPath: delimited path to a key, with parse/display and name rules
//! - ValueType: the fixed five-member value type enumeration
//! - ValueData: normalized value payload plus the text codec
//! - Error: error type hierarchy
//!
//! Everything here is plain data with no knowledge of the tree, locking, or
//! any transport layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod path;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use path::{fold_name, validate_key_name, KeyPath, PATH_DELIMITER};
pub use types::{UnknownValueType, ValueType};
pub use value::ValueData;
