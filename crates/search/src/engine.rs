//! Subtree search
//!
//! Depth-first, pre-order traversal from a caller-chosen root key, matching
//! the query against each value's name and rendered data. The whole
//! traversal runs under one read lock, so results are a consistent view
//! even while writers are queued.
//!
//! No ranking: hits come back in traversal order (a key's values before its
//! descendants', children in listing order).

use crate::matcher::{MatchSpan, QueryMatcher};
use reghive_core::{Error, KeyPath, Result};
use reghive_store::{KeyNode, Registry};
use serde::Serialize;
use tracing::debug;

/// One matched value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Full path of the key owning the value
    pub location: String,
    /// The value's display name
    pub name: String,
    /// The value's rendered data
    pub data: String,
    /// Match offsets within `name` (empty if the name did not match)
    pub name_spans: Vec<MatchSpan>,
    /// Match offsets within `data` (empty if the data did not match)
    pub data_spans: Vec<MatchSpan>,
}

/// Search a subtree's values for a case-insensitive substring
///
/// `root_path` is the root of the search, not necessarily the tree root.
/// With `recursive` false only that key's own values are scanned. Fails
/// with [`Error::InvalidQuery`] on an empty query, before any traversal.
///
/// # Example
///
/// ```
/// use reghive_core::ValueType;
/// use reghive_store::Registry;
///
/// let registry = Registry::new();
/// registry.create_key("", "A")?;
/// registry.create_key("A", "B")?;
/// registry.set_value("A\\B", "foobar", ValueType::Sz, "x")?;
///
/// let hits = reghive_search::search(&registry, "", "foo", true)?;
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].location, "A\\B");
/// # Ok::<(), reghive_core::Error>(())
/// ```
pub fn search(
    registry: &Registry,
    root_path: &str,
    query: &str,
    recursive: bool,
) -> Result<Vec<SearchHit>> {
    if query.is_empty() {
        return Err(Error::InvalidQuery);
    }
    let root = KeyPath::parse(root_path)?;
    let matcher = QueryMatcher::new(query);
    debug!(root = %root, query, recursive, "searching subtree");

    registry.read(|tree| {
        let node = tree.locate(&root)?;
        let mut hits = Vec::new();
        scan_node(node, &root, &matcher, recursive, &mut hits);
        Ok(hits)
    })
}

fn scan_node(
    node: &KeyNode,
    path: &KeyPath,
    matcher: &QueryMatcher,
    recursive: bool,
    hits: &mut Vec<SearchHit>,
) {
    for value in node.values() {
        let data = value.data().render();
        let name_spans = matcher.find(value.name());
        let data_spans = matcher.find(&data);
        if name_spans.is_empty() && data_spans.is_empty() {
            continue;
        }
        hits.push(SearchHit {
            location: path.to_string(),
            name: value.name().to_string(),
            data,
            name_spans,
            data_spans,
        });
    }
    if recursive {
        for child in node.children() {
            scan_node(child, &path.child(child.name()), matcher, recursive, hits);
        }
    }
}
