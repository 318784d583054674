//! Value type enumeration
//!
//! The registry supports exactly five value types, identified by their
//! symbolic `REG_*` names on every external surface. The set is fixed:
//! adding a type means extending the codec in `value.rs` as well.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of registry value types
///
/// Transported as symbolic names (`REG_SZ`, `REG_EXPAND_SZ`, `REG_DWORD`,
/// `REG_BINARY`, `REG_MULTI_SZ`). Newly created values default to [`ValueType::Sz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueType {
    /// Plain string
    #[default]
    #[serde(rename = "REG_SZ")]
    Sz,
    /// Expandable string (environment references left unexpanded)
    #[serde(rename = "REG_EXPAND_SZ")]
    ExpandSz,
    /// Unsigned 32-bit integer
    #[serde(rename = "REG_DWORD")]
    Dword,
    /// Raw bytes
    #[serde(rename = "REG_BINARY")]
    Binary,
    /// Ordered list of strings
    #[serde(rename = "REG_MULTI_SZ")]
    MultiSz,
}

impl ValueType {
    /// All supported types, in display order
    pub const ALL: [ValueType; 5] = [
        ValueType::Sz,
        ValueType::ExpandSz,
        ValueType::Dword,
        ValueType::Binary,
        ValueType::MultiSz,
    ];

    /// The symbolic name used on external surfaces
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Sz => "REG_SZ",
            ValueType::ExpandSz => "REG_EXPAND_SZ",
            ValueType::Dword => "REG_DWORD",
            ValueType::Binary => "REG_BINARY",
            ValueType::MultiSz => "REG_MULTI_SZ",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized symbolic type name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value type {0:?}")]
pub struct UnknownValueType(pub String);

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REG_SZ" => Ok(ValueType::Sz),
            "REG_EXPAND_SZ" => Ok(ValueType::ExpandSz),
            "REG_DWORD" => Ok(ValueType::Dword),
            "REG_BINARY" => Ok(ValueType::Binary),
            "REG_MULTI_SZ" => Ok(ValueType::MultiSz),
            other => Err(UnknownValueType(other.to_string())),
        }
    }
}
