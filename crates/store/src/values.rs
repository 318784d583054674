//! Value table operations
//!
//! Per-key named values. All text validation goes through the core codec
//! ([`ValueData::parse`]); a validation failure propagates unchanged and
//! never leaves a partial write behind.

use crate::node::Value;
use crate::tree::RegistryTree;
use reghive_core::{fold_name, Error, KeyPath, Result, ValueData, ValueType};
use serde::{Deserialize, Serialize};

/// One row of a key's value listing, ready for display
///
/// `data` is the rendered text form; the normalized payload stays inside
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueEntry {
    /// Display name (empty for the key's default value)
    pub name: String,
    /// Symbolic value type
    #[serde(rename = "type")]
    pub value_type: ValueType,
    /// Rendered text form of the payload
    pub data: String,
}

impl RegistryTree {
    /// List a key's values as display rows, ordered by folded name
    pub fn list_values(&self, path: &KeyPath) -> Result<Vec<ValueEntry>> {
        let node = self.locate(path)?;
        Ok(node
            .values()
            .map(|value| ValueEntry {
                name: value.name().to_string(),
                value_type: value.value_type(),
                data: value.data().render(),
            })
            .collect())
    }

    /// Create or overwrite a value (upsert: same folded name overwrites)
    ///
    /// The text is validated and normalized before any mutation; a
    /// [`Error::Validation`] failure leaves the key unchanged.
    pub fn set_value(
        &mut self,
        path: &KeyPath,
        name: &str,
        value_type: ValueType,
        text: &str,
    ) -> Result<()> {
        let data = ValueData::parse(value_type, text)?;
        let node = self.locate_mut(path)?;
        node.insert_value(Value::new(name, data));
        Ok(())
    }

    /// Remove a single value
    pub fn delete_value(&mut self, path: &KeyPath, name: &str) -> Result<()> {
        let node = self.locate_mut(path)?;
        if node.remove_value(name).is_none() {
            return Err(Error::ValueNotFound {
                path: path.to_string(),
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Rename a value, preserving its type and data
    ///
    /// A case-only rename of the same value is allowed; any other collision
    /// with an existing name fails with [`Error::Conflict`].
    pub fn rename_value(&mut self, path: &KeyPath, old_name: &str, new_name: &str) -> Result<()> {
        let node = self.locate_mut(path)?;
        if !node.has_value(old_name) {
            return Err(Error::ValueNotFound {
                path: path.to_string(),
                name: old_name.to_string(),
            });
        }
        let same_entry = fold_name(old_name) == fold_name(new_name);
        if !same_entry && node.has_value(new_name) {
            return Err(Error::Conflict {
                path: path.to_string(),
                name: new_name.to_string(),
            });
        }
        let mut value = match node.remove_value(old_name) {
            Some(value) => value,
            None => unreachable!("has_value(old_name) checked above"),
        };
        value.rename(new_name);
        node.insert_value(value);
        Ok(())
    }
}
