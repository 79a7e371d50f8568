//! The derived outline view of a document.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Read-only outline view of a document.
///
/// Three index-aligned sequences describe the tree, in document order:
/// one display line per headline, the 1-based source line it anchors to,
/// and its nesting depth. The sequences always have equal length and the
/// anchors are strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Display text for each headline, suitable for a tree-view line.
    pub tree_lines: Vec<String>,

    /// 1-based source line number of each headline.
    pub anchors: Vec<usize>,

    /// Nesting depth of each headline (>= 1).
    pub depths: Vec<usize>,
}

impl Outline {
    /// Create a new empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of headlines in the outline.
    pub fn len(&self) -> usize {
        self.tree_lines.len()
    }

    /// Check if the outline has no headlines.
    pub fn is_empty(&self) -> bool {
        self.tree_lines.is_empty()
    }

    /// Append a headline, keeping the three sequences aligned.
    pub fn push(&mut self, tree_line: String, anchor: usize, depth: usize) {
        self.tree_lines.push(tree_line);
        self.anchors.push(anchor);
        self.depths.push(depth);
    }

    /// Get a single entry by outline index.
    pub fn get(&self, index: usize) -> Option<OutlineEntry<'_>> {
        Some(OutlineEntry {
            tree_line: self.tree_lines.get(index)?,
            anchor: *self.anchors.get(index)?,
            depth: *self.depths.get(index)?,
        })
    }

    /// Iterate over entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = OutlineEntry<'_>> {
        self.tree_lines
            .iter()
            .zip(&self.anchors)
            .zip(&self.depths)
            .map(|((tree_line, &anchor), &depth)| OutlineEntry {
                tree_line,
                anchor,
                depth,
            })
    }

    /// Serialize the outline to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// A single outline entry, borrowed from an [`Outline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineEntry<'a> {
    /// Display text shown for this headline in a tree view.
    pub tree_line: &'a str,

    /// 1-based source line number.
    pub anchor: usize,

    /// Nesting depth (>= 1).
    pub depth: usize,
}
