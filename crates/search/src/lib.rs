//! Subtree search for reghive
//!
//! This crate provides:
//! - QueryMatcher: case-insensitive substring matching with byte-offset
//!   spans into the original text
//! - search: pre-order subtree traversal producing [`SearchHit`]s
//!
//! Search is a read-side collaborator of the store: it runs entirely under
//! the registry's read lock and never mutates anything.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod matcher;

pub use engine::{search, SearchHit};
pub use matcher::{MatchSpan, QueryMatcher};
