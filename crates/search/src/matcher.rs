//! Case-insensitive substring matching with offset reporting
//!
//! The matcher case-folds both query and candidate text, then maps every
//! match back to byte offsets in the original (unfolded) text. Spans are
//! what lets a presentation layer highlight hits without re-running the
//! match against its own markup.
//!
//! Folding uses full Unicode lowercasing, which can change a character's
//! byte length, so the fold keeps a per-byte map back to the source
//! character's boundaries.

use serde::{Deserialize, Serialize};

/// Byte offsets `[start, end)` of one match occurrence in the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
}

/// A prepared, case-folded query
///
/// # Example
///
/// ```
/// use reghive_search::QueryMatcher;
///
/// let matcher = QueryMatcher::new("foo");
/// let spans = matcher.find("foobar FOO");
/// assert_eq!(spans.len(), 2);
/// assert_eq!((spans[0].start, spans[0].end), (0, 3));
/// assert_eq!((spans[1].start, spans[1].end), (7, 10));
/// ```
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    folded_query: String,
}

impl QueryMatcher {
    /// Fold a query for repeated matching
    ///
    /// Emptiness is the engine's concern; an empty query here matches
    /// nothing.
    pub fn new(query: &str) -> Self {
        QueryMatcher {
            folded_query: query.to_lowercase(),
        }
    }

    /// All non-overlapping occurrences of the query in `text`
    ///
    /// Spans index into `text` as given, not into its folded form.
    pub fn find(&self, text: &str) -> Vec<MatchSpan> {
        if self.folded_query.is_empty() {
            return Vec::new();
        }

        // Fold the haystack, remembering for every folded byte which source
        // character it came from.
        let mut folded = String::with_capacity(text.len());
        let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
        for (offset, ch) in text.char_indices() {
            let bounds = (offset, offset + ch.len_utf8());
            for lower in ch.to_lowercase() {
                for _ in 0..lower.len_utf8() {
                    origin.push(bounds);
                }
                folded.push(lower);
            }
        }

        let mut spans = Vec::new();
        let mut from = 0;
        while let Some(found) = folded[from..].find(&self.folded_query) {
            let start = from + found;
            let last = start + self.folded_query.len() - 1;
            spans.push(MatchSpan {
                start: origin[start].0,
                end: origin[last].1,
            });
            from = start + self.folded_query.len();
        }
        spans
    }

    /// True if the query occurs at least once in `text`
    pub fn is_match(&self, text: &str) -> bool {
        !self.find(text).is_empty()
    }
}
