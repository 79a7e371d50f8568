//! Headline-level value types.

use serde::{Deserialize, Serialize};

/// Borrowed view of a successfully parsed headline line.
///
/// Produced by [`MarkerSyntax::parse`](crate::MarkerSyntax::parse). The
/// `rest` field starts at the first character after the marker run, so it
/// always begins with the whitespace separator; re-leveling a headline
/// reuses it verbatim to leave the separator and title untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline<'a> {
    /// Nesting depth: the length of the marker run (>= 1).
    pub depth: usize,

    /// Title with surrounding whitespace stripped. May be empty.
    pub title: &'a str,

    /// Everything after the marker run, byte-for-byte.
    pub rest: &'a str,
}

/// Result of synthesizing a new headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewHeadline {
    /// Placeholder title, to be shown in the tree view and renamed by the
    /// user afterward.
    pub title: String,

    /// Lines to insert into the document: the headline line and one empty
    /// body placeholder line.
    pub body_lines: Vec<String>,
}
