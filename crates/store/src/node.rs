//! Key nodes and named values
//!
//! A node owns two maps, both keyed by the case-folded name so uniqueness
//! and lookup are case-insensitive while entries keep their display case:
//! - children: folded name -> child node
//! - values: folded name -> named value
//!
//! Nodes hold no back-reference to their parent; a node's path is derived
//! from the walk that located it, so renaming a key never has to rewrite
//! anything below it.

use reghive_core::{fold_name, ValueData, ValueType};
use std::collections::BTreeMap;

/// A named, typed value stored under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    name: String,
    data: ValueData,
}

impl Value {
    pub(crate) fn new(name: impl Into<String>, data: ValueData) -> Self {
        Value {
            name: name.into(),
            data,
        }
    }

    /// The value's display name (the empty name is the key's default value)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized payload
    pub fn data(&self) -> &ValueData {
        &self.data
    }

    /// The value's type
    pub fn value_type(&self) -> ValueType {
        self.data.value_type()
    }

    pub(crate) fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }
}

/// One key in the hierarchy
///
/// The root node has an empty name; every other node's name is the final
/// segment of its path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyNode {
    name: String,
    children: BTreeMap<String, KeyNode>,
    values: BTreeMap<String, Value>,
}

impl KeyNode {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        KeyNode {
            name: name.into(),
            children: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    /// The key's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child nodes, ordered by folded name
    pub fn children(&self) -> impl Iterator<Item = &KeyNode> {
        self.children.values()
    }

    /// Values, ordered by folded name
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.values()
    }

    /// Look up a child case-insensitively
    pub fn child(&self, name: &str) -> Option<&KeyNode> {
        self.children.get(&fold_name(name))
    }

    /// Look up a value case-insensitively
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(&fold_name(name))
    }

    pub(crate) fn child_mut(&mut self, name: &str) -> Option<&mut KeyNode> {
        self.children.get_mut(&fold_name(name))
    }

    pub(crate) fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(&fold_name(name))
    }

    pub(crate) fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(&fold_name(name))
    }

    pub(crate) fn insert_child(&mut self, node: KeyNode) {
        self.children.insert(fold_name(&node.name), node);
    }

    pub(crate) fn remove_child(&mut self, name: &str) -> Option<KeyNode> {
        self.children.remove(&fold_name(name))
    }

    pub(crate) fn insert_value(&mut self, value: Value) {
        self.values.insert(fold_name(&value.name), value);
    }

    pub(crate) fn remove_value(&mut self, name: &str) -> Option<Value> {
        self.values.remove(&fold_name(name))
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
