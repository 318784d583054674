//! Key tree store and value table for reghive
//!
//! This crate owns the node hierarchy and per-key values:
//! - KeyNode / Value: the tree's building blocks (case-insensitive names)
//! - RegistryTree: structural operations (create/delete/rename/list/snapshot)
//! - value table operations (list/set/delete/rename values)
//! - Registry: the shared, lock-guarded facade handed to transports
//!
//! Concurrency model: single writer / multiple readers at whole-store
//! granularity. Rename and delete touch an unbounded subtree and must look
//! atomic to readers, so mutation takes the write lock for its whole
//! duration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod node;
pub mod registry;
pub mod tree;
pub mod values;

pub use node::{KeyNode, Value};
pub use registry::Registry;
pub use tree::{RegistryTree, TreeSnapshot};
pub use values::ValueEntry;
