//! Outline extraction: derive the tree view from document lines.

use crate::model::Outline;
use crate::syntax::MarkerSyntax;

/// Scan document lines and build the outline.
///
/// Every line matching the headline grammar contributes one entry, in
/// document order. Lines carrying the sentinel without a valid marker run
/// and whitespace separator are plain body text and are skipped. The input
/// is not mutated; the same input always yields the same outline.
///
/// # Example
///
/// ```
/// use treemark::{extract, MarkerSyntax};
///
/// let syntax = MarkerSyntax::default();
/// let doc = ["#R! Intro", "body text", "#R!! Sub", "#R!!! Leaf"];
/// let outline = extract(&doc, &syntax);
///
/// assert_eq!(outline.tree_lines, ["  |Intro", "  . |Sub", "  . . |Leaf"]);
/// assert_eq!(outline.anchors, [1, 3, 4]);
/// assert_eq!(outline.depths, [1, 2, 3]);
/// ```
pub fn extract<L: AsRef<str>>(lines: &[L], syntax: &MarkerSyntax) -> Outline {
    let mut outline = Outline::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        // Cheap prefilter before the full pattern match.
        if !syntax.is_candidate(line) {
            continue;
        }
        let Some(head) = syntax.parse(line) else {
            continue;
        };
        outline.push(tree_line(head.depth, head.title), index + 1, head.depth);
    }

    log::debug!(
        "outline scan: {} headlines in {} lines",
        outline.len(),
        lines.len()
    );
    outline
}

/// Extract an outline from a document held as a single string.
///
/// Convenience wrapper splitting on line terminators via [`str::lines`]
/// (`\r\n` is handled, a trailing newline adds no line); anchors refer to
/// the resulting line numbering.
pub fn extract_text(text: &str, syntax: &MarkerSyntax) -> Outline {
    let lines: Vec<&str> = text.lines().collect();
    extract(&lines, syntax)
}

/// Display text for one headline: fixed-width indentation proportional to
/// depth, a `|` delimiter, then the title.
fn tree_line(depth: usize, title: &str) -> String {
    format!("  {}|{}", ". ".repeat(depth - 1), title)
}
