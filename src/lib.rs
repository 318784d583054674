//! reghive - embedded hierarchical typed key-value store
//!
//! reghive models a Windows-Registry-style store: a tree of keys, each
//! holding named, typed values. It is the core behind a registry browser:
//! path resolution, recursive key deletion, renames with implicit path
//! rewriting, typed-value validation/encoding, and subtree search. There is
//! no HTTP, HTML, or persistence here; a thin transport layer maps requests
//! onto these plain-data operations.
//!
//! # Quick Start
//!
//! ```
//! use reghive::{search, Registry, ValueType};
//!
//! let registry = Registry::with_standard_hives();
//!
//! // Create a key and give it a value
//! let path = registry.create_key("HKEY_CURRENT_USER\\Software", "MyApp")?;
//! registry.set_value(&path.to_string(), "Version", ValueType::Sz, "1.0.0")?;
//!
//! // Find it again
//! let hits = search(&registry, "", "version", true)?;
//! assert_eq!(hits[0].location, "HKEY_CURRENT_USER\\Software\\MyApp");
//! # Ok::<(), reghive::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `reghive-core`: paths, value types, the text codec, errors
//! - `reghive-store`: the key tree, value table, and the locked [`Registry`]
//!   facade (single writer / multiple readers, whole-store granularity)
//! - `reghive-search`: pre-order subtree search with match spans

pub use reghive_core::{
    fold_name, validate_key_name, Error, KeyPath, Result, UnknownValueType, ValueData, ValueType,
    PATH_DELIMITER,
};
pub use reghive_search::{search, MatchSpan, QueryMatcher, SearchHit};
pub use reghive_store::{KeyNode, Registry, RegistryTree, TreeSnapshot, Value, ValueEntry};
