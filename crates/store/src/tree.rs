//! The key hierarchy and its structural operations
//!
//! `RegistryTree` is the single-threaded tree; all locking lives in the
//! [`Registry`](crate::Registry) facade. Every operation either fully
//! succeeds or leaves the tree untouched: all validation (path resolution,
//! name legality, conflict checks) happens before the first mutation.

use crate::node::KeyNode;
use reghive_core::{fold_name, validate_key_name, Error, KeyPath, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// A read-only, point-in-time copy of the hierarchy, names only
///
/// Serializes to the nested `{name: {child: {...}}}` shape the tree panel
/// of a UI consumes directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TreeSnapshot(pub BTreeMap<String, TreeSnapshot>);

impl TreeSnapshot {
    /// Look up a direct child by display name
    pub fn get(&self, name: &str) -> Option<&TreeSnapshot> {
        self.0.get(name)
    }

    /// Number of direct children
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if this subtree has no children
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The in-memory key hierarchy
///
/// The root node always exists and can never be created, deleted, or
/// renamed.
#[derive(Debug, Clone, Default)]
pub struct RegistryTree {
    root: KeyNode,
}

impl RegistryTree {
    /// An empty tree (root only)
    pub fn new() -> Self {
        RegistryTree {
            root: KeyNode::new(""),
        }
    }

    pub(crate) fn root_mut(&mut self) -> &mut KeyNode {
        &mut self.root
    }

    /// Walk from the root to the key a path denotes
    ///
    /// Matching is case-insensitive per segment. Fails with
    /// [`Error::KeyNotFound`] naming the first segment that did not resolve.
    pub fn locate(&self, path: &KeyPath) -> Result<&KeyNode> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current.child(segment).ok_or_else(|| Error::KeyNotFound {
                path: path.to_string(),
                segment: segment.clone(),
            })?;
        }
        Ok(current)
    }

    pub(crate) fn locate_mut(&mut self, path: &KeyPath) -> Result<&mut KeyNode> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = current
                .child_mut(segment)
                .ok_or_else(|| Error::KeyNotFound {
                    path: path.to_string(),
                    segment: segment.clone(),
                })?;
        }
        Ok(current)
    }

    /// Create an empty key as an immediate child of an existing key
    ///
    /// Returns the new key's absolute path.
    pub fn create_key(&mut self, parent: &KeyPath, name: &str) -> Result<KeyPath> {
        validate_key_name(name)?;
        let parent_node = self.locate_mut(parent)?;
        if parent_node.has_child(name) {
            return Err(Error::Conflict {
                path: parent.to_string(),
                name: name.to_string(),
            });
        }
        parent_node.insert_child(KeyNode::new(name));
        Ok(parent.child(name))
    }

    /// Detach a key and its entire subtree, values included
    pub fn delete_key(&mut self, path: &KeyPath) -> Result<()> {
        let (parent, leaf) = split_leaf(path, "delete")?;
        // Resolve the full path first so the error names the right segment.
        self.locate(path)?;
        let parent_node = self.locate_mut(&parent)?;
        parent_node.remove_child(leaf);
        Ok(())
    }

    /// Rename a key in place
    ///
    /// Descendants keep their identity; their paths change implicitly because
    /// paths are derived from ancestor names. A case-only rename of the same
    /// key is allowed. Returns the new absolute path.
    pub fn rename_key(&mut self, path: &KeyPath, new_name: &str) -> Result<KeyPath> {
        validate_key_name(new_name)?;
        let (parent, leaf) = split_leaf(path, "rename")?;
        self.locate(path)?;
        let parent_node = self.locate_mut(&parent)?;
        let same_entry = fold_name(leaf) == fold_name(new_name);
        if !same_entry && parent_node.has_child(new_name) {
            return Err(Error::Conflict {
                path: parent.to_string(),
                name: new_name.to_string(),
            });
        }
        // Checks done; re-insertion under the new fold cannot fail.
        let mut node = match parent_node.remove_child(leaf) {
            Some(node) => node,
            None => unreachable!("locate(path) succeeded above"),
        };
        node.set_name(new_name);
        parent_node.insert_child(node);
        Ok(parent.child(new_name))
    }

    /// Display names of a key's direct children
    ///
    /// Ordered by folded name for deterministic display; the order carries
    /// no identity.
    pub fn list_children(&self, path: &KeyPath) -> Result<Vec<String>> {
        let node = self.locate(path)?;
        Ok(node.children().map(|c| c.name().to_string()).collect())
    }

    /// Deep copy of the hierarchy, names only
    pub fn snapshot(&self) -> TreeSnapshot {
        snapshot_node(&self.root)
    }
}

fn snapshot_node(node: &KeyNode) -> TreeSnapshot {
    TreeSnapshot(
        node.children()
            .map(|child| (child.name().to_string(), snapshot_node(child)))
            .collect(),
    )
}

/// Split a path into parent and leaf, rejecting the root
fn split_leaf<'p>(path: &'p KeyPath, verb: &str) -> Result<(KeyPath, &'p str)> {
    match (path.parent(), path.leaf()) {
        (Some(parent), Some(leaf)) => Ok((parent, leaf)),
        _ => Err(Error::InvalidOperation(format!(
            "cannot {verb} the root key"
        ))),
    }
}
