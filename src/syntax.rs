//! Headline grammar configuration.
//!
//! A headline line starts with the fixed two-character sentinel `#R`,
//! followed by a run of one or more marker characters, followed by at least
//! one whitespace character and a free-text title:
//!
//! ```text
//! #R! headline depth 1
//! #R!! headline depth 2
//! #R!!! headline depth 3
//! ```
//!
//! The marker character is configurable per [`MarkerSyntax`], so documents
//! using different markers can be handled side by side without any shared
//! state.

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::Headline;

/// Fixed two-character prefix identifying a potential headline line.
pub const SENTINEL: &str = "#R";

/// Marker character used by [`MarkerSyntax::default`].
pub const DEFAULT_MARKER: char = '!';

/// Immutable headline grammar descriptor.
///
/// Holds the configured marker character and the precompiled headline
/// pattern. Construct one per document (or share one across documents using
/// the same marker) and pass it by reference into the outline operations.
///
/// # Example
///
/// ```
/// use treemark::MarkerSyntax;
///
/// let syntax = MarkerSyntax::new('*').unwrap();
/// assert!(syntax.parse("#R** A headline").is_some());
/// assert!(syntax.parse("#R!! Wrong marker").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MarkerSyntax {
    marker: char,
    /// Sentinel plus one marker character, used as a cheap prefilter before
    /// the full pattern match.
    prefix: String,
    pattern: Regex,
}

impl MarkerSyntax {
    /// Create a grammar descriptor for the given marker character.
    ///
    /// The marker must be a printable, non-whitespace ASCII character.
    /// Anything else is rejected with [`Error::InvalidMarker`].
    pub fn new(marker: char) -> Result<Self> {
        if !marker.is_ascii() || marker.is_ascii_whitespace() || marker.is_ascii_control() {
            return Err(Error::InvalidMarker(marker));
        }
        let escaped = regex::escape(&marker.to_string());
        let pattern = Regex::new(&format!("^{}({}+)\\s", SENTINEL, escaped))
            .map_err(|_| Error::InvalidMarker(marker))?;
        Ok(Self {
            marker,
            prefix: format!("{}{}", SENTINEL, marker),
            pattern,
        })
    }

    /// The configured marker character.
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Cheap prefilter: does the line start with sentinel + marker?
    ///
    /// Lines failing this cannot be headlines; lines passing it still have
    /// to satisfy the full grammar in [`parse`](Self::parse).
    pub fn is_candidate(&self, line: &str) -> bool {
        line.starts_with(&self.prefix)
    }

    /// Match a line against the full headline grammar.
    ///
    /// Returns a borrowed [`Headline`] view on success, `None` if the line
    /// is plain body text (including sentinel-prefixed lines not followed by
    /// a marker run and whitespace).
    pub fn parse<'a>(&self, line: &'a str) -> Option<Headline<'a>> {
        let caps = self.pattern.captures(line)?;
        // Group 1 is the marker run; the marker is ASCII so its byte length
        // equals the headline depth.
        let run = caps.get(1)?;
        let depth = run.len();
        Some(Headline {
            depth,
            title: line[run.end()..].trim(),
            rest: &line[run.end()..],
        })
    }

    /// Build a syntactically valid headline line at the given depth.
    pub fn headline(&self, depth: usize, title: &str) -> String {
        let mut line = String::with_capacity(SENTINEL.len() + depth + 1 + title.len());
        line.push_str(SENTINEL);
        for _ in 0..depth {
            line.push(self.marker);
        }
        line.push(' ');
        line.push_str(title);
        line
    }
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER).expect("default marker character is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker() {
        let syntax = MarkerSyntax::default();
        assert_eq!(syntax.marker(), '!');
        assert!(syntax.is_candidate("#R! Intro"));
        assert!(!syntax.is_candidate("  #R! Indented"));
    }

    #[test]
    fn test_parse_depth_and_title() {
        let syntax = MarkerSyntax::default();
        let head = syntax.parse("#R!!! Leaf  ").unwrap();
        assert_eq!(head.depth, 3);
        assert_eq!(head.title, "Leaf");
        assert_eq!(head.rest, " Leaf  ");
    }

    #[test]
    fn test_parse_requires_whitespace_after_run() {
        let syntax = MarkerSyntax::default();
        // Marker run at end of line, no separator: not a headline.
        assert!(syntax.parse("#R!!!").is_none());
        // Whitespace separator with an empty title is still a headline.
        let head = syntax.parse("#R!! ").unwrap();
        assert_eq!(head.depth, 2);
        assert_eq!(head.title, "");
    }

    #[test]
    fn test_sentinel_without_marker_is_body_text() {
        let syntax = MarkerSyntax::default();
        assert!(syntax.parse("#R plain").is_none());
        assert!(syntax.parse("#Rx! nope").is_none());
    }

    #[test]
    fn test_regex_metacharacter_marker() {
        let syntax = MarkerSyntax::new('*').unwrap();
        let head = syntax.parse("#R** Sub").unwrap();
        assert_eq!(head.depth, 2);
        assert_eq!(head.title, "Sub");
        // '.' must not match arbitrary characters.
        let syntax = MarkerSyntax::new('.').unwrap();
        assert!(syntax.parse("#R!! Sub").is_none());
        assert!(syntax.parse("#R.. Sub").is_some());
    }

    #[test]
    fn test_invalid_markers_rejected() {
        assert!(matches!(
            MarkerSyntax::new(' '),
            Err(Error::InvalidMarker(' '))
        ));
        assert!(matches!(MarkerSyntax::new('\n'), Err(Error::InvalidMarker(_))));
        assert!(matches!(MarkerSyntax::new('é'), Err(Error::InvalidMarker(_))));
    }

    #[test]
    fn test_headline_builder() {
        let syntax = MarkerSyntax::default();
        assert_eq!(syntax.headline(2, "Title"), "#R!! Title");
        let line = syntax.headline(4, "Deep");
        let head = syntax.parse(&line).unwrap();
        assert_eq!(head.depth, 4);
        assert_eq!(head.title, "Deep");
    }
}
