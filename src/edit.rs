//! Headline transformations: synthesis and re-leveling.
//!
//! Both operations are pure: they consume a depth or a line and return new
//! values, leaving the document itself to the caller.

use crate::error::{Error, Result};
use crate::model::NewHeadline;
use crate::syntax::{MarkerSyntax, SENTINEL};

/// Placeholder title for newly synthesized headlines.
pub const NEW_HEADLINE_TITLE: &str = "NewHeadline";

/// Synthesize a new headline at the given depth.
///
/// Returns the placeholder title and exactly two lines to insert into the
/// document: the headline line and one empty body placeholder line. The
/// caller is expected to let the user rename the title afterward.
///
/// A depth of 0 is rejected with [`Error::DepthOutOfRange`].
///
/// # Example
///
/// ```
/// use treemark::{new_headline, MarkerSyntax};
///
/// let syntax = MarkerSyntax::default();
/// let head = new_headline(2, &syntax).unwrap();
/// assert_eq!(head.title, "NewHeadline");
/// assert_eq!(head.body_lines, ["#R!! NewHeadline", ""]);
/// ```
pub fn new_headline(depth: usize, syntax: &MarkerSyntax) -> Result<NewHeadline> {
    if depth == 0 {
        return Err(Error::DepthOutOfRange(0));
    }
    Ok(NewHeadline {
        title: NEW_HEADLINE_TITLE.to_string(),
        body_lines: vec![syntax.headline(depth, NEW_HEADLINE_TITLE), String::new()],
    })
}

/// Re-level an existing headline line by a signed delta.
///
/// Only the marker run changes: everything from the first post-marker
/// whitespace character onward is preserved byte-for-byte. A zero delta
/// returns the line unchanged without parsing it.
///
/// The line must match the headline grammar; callers are expected to only
/// pass lines obtained from extraction, and anything else is surfaced as
/// [`Error::NotAHeadline`]. A delta driving the depth below 1 is rejected
/// with [`Error::DepthOutOfRange`], so every `Ok` result is itself a valid
/// headline line.
///
/// # Example
///
/// ```
/// use treemark::{change_level, MarkerSyntax};
///
/// let syntax = MarkerSyntax::default();
/// let line = change_level("#R!! Title here", 1, &syntax).unwrap();
/// assert_eq!(line, "#R!!! Title here");
/// ```
pub fn change_level(line: &str, delta: i32, syntax: &MarkerSyntax) -> Result<String> {
    if delta == 0 {
        return Ok(line.to_string());
    }

    let head = syntax
        .parse(line)
        .ok_or_else(|| Error::NotAHeadline(line.to_string()))?;

    let new_depth = head.depth as i64 + i64::from(delta);
    if new_depth < 1 {
        return Err(Error::DepthOutOfRange(new_depth));
    }

    let mut out = String::with_capacity(line.len().saturating_add(delta.max(0) as usize));
    out.push_str(SENTINEL);
    for _ in 0..new_depth {
        out.push(syntax.marker());
    }
    out.push_str(head.rest);
    Ok(out)
}
