//! # treemark
//!
//! Outline adapter for line-markup text.
//!
//! This library lets a two-pane outliner present a flat text document as a
//! navigable tree. A headline is a line starting with the `#R` sentinel,
//! a run of marker characters whose length is the nesting depth, and a
//! whitespace-separated title:
//!
//! ```text
//! #R! headline depth 1
//! some text
//! #R!! headline depth 2
//! ```
//!
//! Three pure operations cover the whole contract:
//!
//! - [`extract`] scans document lines and derives the outline: display
//!   text, 1-based source anchors, and depths, index-aligned.
//! - [`new_headline`] synthesizes a valid headline line (plus an empty body
//!   placeholder) at a requested depth.
//! - [`change_level`] rewrites a headline's marker run by a signed delta,
//!   preserving the separator and title byte-for-byte.
//!
//! The marker character is configurable through [`MarkerSyntax`]; each
//! descriptor is an immutable value, so documents with different markers
//! coexist without shared state.
//!
//! ## Quick Start
//!
//! ```
//! use treemark::{extract, change_level, MarkerSyntax};
//!
//! fn main() -> treemark::Result<()> {
//!     let syntax = MarkerSyntax::default();
//!
//!     let doc = ["#R! Intro", "body text", "#R!! Sub"];
//!     let outline = extract(&doc, &syntax);
//!     assert_eq!(outline.tree_lines, ["  |Intro", "  . |Sub"]);
//!     assert_eq!(outline.anchors, [1, 3]);
//!
//!     // Demote the second headline; the host replaces line 3 with this.
//!     let demoted = change_level("#R!! Sub", 1, &syntax)?;
//!     assert_eq!(demoted, "#R!!! Sub");
//!     Ok(())
//! }
//! ```

pub mod edit;
pub mod error;
pub mod extract;
pub mod model;
pub mod syntax;

// Re-export commonly used types
pub use edit::{change_level, new_headline, NEW_HEADLINE_TITLE};
pub use error::{Error, Result};
pub use extract::{extract, extract_text};
pub use model::{Headline, NewHeadline, Outline, OutlineEntry};
pub use syntax::{MarkerSyntax, DEFAULT_MARKER, SENTINEL};
