//! Shared registry handle
//!
//! `Registry` is the facade the transport layer talks to. It owns the tree
//! behind a single `RwLock`: every mutating operation holds the write lock
//! for its whole duration, every read holds the read lock, so subtree
//! rename and delete are atomic to concurrent readers. Clones share the
//! same tree.
//!
//! Paths cross this boundary as plain strings and are resolved here; the
//! tree below only ever sees parsed [`KeyPath`]s.

use crate::tree::{RegistryTree, TreeSnapshot};
use crate::values::ValueEntry;
use parking_lot::RwLock;
use reghive_core::{KeyPath, Result, ValueType};
use std::sync::Arc;
use tracing::debug;

/// Hives the store boots with, mirroring a stock system layout
const STANDARD_HIVES: [(&str, &[&str]); 2] = [
    ("HKEY_LOCAL_MACHINE", &["SOFTWARE", "SYSTEM"]),
    ("HKEY_CURRENT_USER", &["Control Panel", "Software"]),
];

/// Thread-safe handle to one registry tree
///
/// # Example
///
/// ```
/// use reghive_store::Registry;
/// use reghive_core::ValueType;
///
/// let registry = Registry::with_standard_hives();
/// let path = registry.create_key("HKEY_CURRENT_USER\\Software", "MyApp")?;
/// registry.set_value(&path.to_string(), "Version", ValueType::Sz, "1.0.0")?;
/// assert_eq!(registry.list_values(&path.to_string())?.len(), 1);
/// # Ok::<(), reghive_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tree: Arc<RwLock<RegistryTree>>,
}

impl Registry {
    /// An empty registry (root key only)
    pub fn new() -> Self {
        Registry {
            tree: Arc::new(RwLock::new(RegistryTree::new())),
        }
    }

    /// A registry seeded with the standard hives
    pub fn with_standard_hives() -> Self {
        let registry = Registry::new();
        {
            let mut tree = registry.tree.write();
            for (hive, subkeys) in STANDARD_HIVES {
                let mut node = crate::node::KeyNode::new(hive);
                for subkey in subkeys {
                    node.insert_child(crate::node::KeyNode::new(*subkey));
                }
                tree.root_mut().insert_child(node);
            }
        }
        registry
    }

    /// Run a closure under the read lock
    ///
    /// Used by read-side collaborators (such as search) that need a
    /// consistent view of the whole tree for the duration of a traversal.
    pub fn read<R>(&self, f: impl FnOnce(&RegistryTree) -> R) -> R {
        let tree = self.tree.read();
        f(&tree)
    }

    // --- Key operations ---

    /// Create a key under `parent_path`; returns the new absolute path
    pub fn create_key(&self, parent_path: &str, name: &str) -> Result<KeyPath> {
        let parent = KeyPath::parse(parent_path)?;
        let mut tree = self.tree.write();
        let created = tree.create_key(&parent, name)?;
        debug!(path = %created, "created key");
        Ok(created)
    }

    /// Delete a key and its entire subtree
    pub fn delete_key(&self, path: &str) -> Result<()> {
        let path = KeyPath::parse(path)?;
        let mut tree = self.tree.write();
        tree.delete_key(&path)?;
        debug!(path = %path, "deleted key");
        Ok(())
    }

    /// Rename a key; returns the new absolute path
    pub fn rename_key(&self, path: &str, new_name: &str) -> Result<KeyPath> {
        let path = KeyPath::parse(path)?;
        let mut tree = self.tree.write();
        let renamed = tree.rename_key(&path, new_name)?;
        debug!(old = %path, new = %renamed, "renamed key");
        Ok(renamed)
    }

    /// Display names of a key's direct children
    pub fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let path = KeyPath::parse(path)?;
        self.tree.read().list_children(&path)
    }

    /// Point-in-time copy of the hierarchy, names only
    pub fn snapshot_tree(&self) -> TreeSnapshot {
        self.tree.read().snapshot()
    }

    // --- Value operations ---

    /// List a key's values as display rows
    pub fn list_values(&self, path: &str) -> Result<Vec<ValueEntry>> {
        let path = KeyPath::parse(path)?;
        self.tree.read().list_values(&path)
    }

    /// Create or overwrite a value
    pub fn set_value(
        &self,
        path: &str,
        name: &str,
        value_type: ValueType,
        text: &str,
    ) -> Result<()> {
        let path = KeyPath::parse(path)?;
        let mut tree = self.tree.write();
        tree.set_value(&path, name, value_type, text)?;
        debug!(path = %path, name, %value_type, "set value");
        Ok(())
    }

    /// Delete a single value
    pub fn delete_value(&self, path: &str, name: &str) -> Result<()> {
        let path = KeyPath::parse(path)?;
        let mut tree = self.tree.write();
        tree.delete_value(&path, name)?;
        debug!(path = %path, name, "deleted value");
        Ok(())
    }

    /// Rename a value, preserving its type and data
    pub fn rename_value(&self, path: &str, old_name: &str, new_name: &str) -> Result<()> {
        let path = KeyPath::parse(path)?;
        let mut tree = self.tree.write();
        tree.rename_value(&path, old_name, new_name)?;
        debug!(path = %path, old_name, new_name, "renamed value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reghive_core::Error;

    #[test]
    fn test_standard_hives() {
        let registry = Registry::with_standard_hives();
        let roots = registry.list_children("").unwrap();
        assert_eq!(roots, vec!["HKEY_CURRENT_USER", "HKEY_LOCAL_MACHINE"]);
        assert_eq!(
            registry.list_children("HKEY_CURRENT_USER").unwrap(),
            vec!["Control Panel", "Software"]
        );
        assert_eq!(
            registry.list_children("HKEY_LOCAL_MACHINE").unwrap(),
            vec!["SOFTWARE", "SYSTEM"]
        );
    }

    #[test]
    fn test_clones_share_one_tree() {
        let registry = Registry::new();
        let other = registry.clone();
        registry.create_key("", "Shared").unwrap();
        assert_eq!(other.list_children("").unwrap(), vec!["Shared"]);
    }

    #[test]
    fn test_facade_parses_paths() {
        let registry = Registry::new();
        let err = registry.create_key("A\\\\B", "x").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_end_to_end_value_flow() {
        let registry = Registry::with_standard_hives();
        let path = "HKEY_CURRENT_USER\\Software";
        registry
            .set_value(path, "Installed", ValueType::Dword, "1")
            .unwrap();
        let rows = registry.list_values(path).unwrap();
        assert_eq!(rows[0].name, "Installed");
        assert_eq!(rows[0].data, "1");

        registry.rename_value(path, "Installed", "WasInstalled").unwrap();
        registry.delete_value(path, "WasInstalled").unwrap();
        assert!(registry.list_values(path).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_tree_from_facade() {
        let registry = Registry::with_standard_hives();
        let snap = registry.snapshot_tree();
        assert!(snap.get("HKEY_LOCAL_MACHINE").unwrap().get("SYSTEM").is_some());
    }
}
