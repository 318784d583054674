//! Key path resolution
//!
//! This module defines path parsing rules that are enforced at every API
//! boundary. A path is a `\`-delimited sequence of key names:
//!
//! - the empty string denotes the root (zero segments)
//! - no segment may be empty (`"A\\\\B"` and `"A\\"` are malformed)
//! - segments never contain the delimiter
//! - names preserve case but compare case-insensitively
//!
//! Resolution is pure: parsing a path never touches the tree.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reserved path delimiter
pub const PATH_DELIMITER: char = '\\';

/// Case-fold a key or value name for map lookup
///
/// Stored names keep their original case; uniqueness and matching use this
/// fold. Unicode lowercase, so `"Söftware"` and `"SÖFTWARE"` collide.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Validate a single key name
///
/// Key names must be non-empty and must not contain the delimiter.
/// Value names are unrestricted (the empty name is a key's default value)
/// and are not checked here.
pub fn validate_key_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidPath {
            path: name.to_string(),
            reason: "key name must not be empty".to_string(),
        });
    }
    if name.contains(PATH_DELIMITER) {
        return Err(Error::InvalidPath {
            path: name.to_string(),
            reason: format!("key name must not contain {PATH_DELIMITER:?}"),
        });
    }
    Ok(())
}

/// An absolute path to a key, as an ordered sequence of name segments
///
/// The root is the empty sequence. Paths are plain data: they identify a
/// location but hold no reference into any tree.
///
/// # Examples
///
/// ```
/// use reghive_core::KeyPath;
///
/// let path = KeyPath::parse("HKEY_CURRENT_USER\\Software").unwrap();
/// assert_eq!(path.segments().len(), 2);
/// assert_eq!(path.to_string(), "HKEY_CURRENT_USER\\Software");
///
/// let root = KeyPath::parse("").unwrap();
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The root path (zero segments)
    pub fn root() -> Self {
        KeyPath {
            segments: Vec::new(),
        }
    }

    /// Parse a delimited path string
    ///
    /// The empty string resolves to the root. Fails with
    /// [`Error::InvalidPath`] if any segment is empty after splitting.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Ok(KeyPath::root());
        }
        let mut segments = Vec::new();
        for segment in path.split(PATH_DELIMITER) {
            if segment.is_empty() {
                return Err(Error::InvalidPath {
                    path: path.to_string(),
                    reason: "empty path segment".to_string(),
                });
            }
            segments.push(segment.to_string());
        }
        Ok(KeyPath { segments })
    }

    /// Build a path directly from segments
    ///
    /// Fails if any segment is not a legal key name.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            validate_key_name(segment)?;
        }
        Ok(KeyPath { segments })
    }

    /// The ordered name segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the root path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The final segment (the key's own name), `None` for the root
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The parent path, `None` for the root
    pub fn parent(&self) -> Option<KeyPath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(KeyPath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Extend this path with one child name
    pub fn child(&self, name: &str) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        KeyPath { segments }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("\\")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        KeyPath::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_root() {
        let path = KeyPath::parse("").unwrap();
        assert!(path.is_root());
        assert_eq!(path.segments().len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let raw = "HKEY_LOCAL_MACHINE\\SOFTWARE\\Vendor App";
        let path = KeyPath::parse(raw).unwrap();
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.to_string(), raw);
    }

    #[test]
    fn test_empty_segment_rejected() {
        for raw in ["\\", "A\\", "\\A", "A\\\\B"] {
            let err = KeyPath::parse(raw).unwrap_err();
            assert!(
                matches!(err, Error::InvalidPath { .. }),
                "expected InvalidPath for {raw:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_segment_case_preserved() {
        let path = KeyPath::parse("Control Panel").unwrap();
        assert_eq!(path.leaf(), Some("Control Panel"));
    }

    #[test]
    fn test_parent_and_child() {
        let path = KeyPath::parse("A\\B\\C").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "A\\B");
        assert_eq!(parent.child("C"), path);
        assert_eq!(KeyPath::root().parent(), None);
    }

    #[test]
    fn test_validate_key_name() {
        assert!(validate_key_name("Software").is_ok());
        assert!(validate_key_name("name with spaces").is_ok());
        assert!(validate_key_name("").is_err());
        assert!(validate_key_name("a\\b").is_err());
    }

    #[test]
    fn test_from_segments_validates() {
        assert!(KeyPath::from_segments(["A", "B"]).is_ok());
        assert!(KeyPath::from_segments(["A", ""]).is_err());
        assert!(KeyPath::from_segments(["A\\B"]).is_err());
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("SOFTWARE"), fold_name("Software"));
        assert_ne!(fold_name("Software"), fold_name("System"));
    }
}
