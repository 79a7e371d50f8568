//! Value types for outline extraction and headline transformations.
//!
//! Everything here is a transient value: extraction derives a read-only
//! [`Outline`] view from document lines, and the transformations consume a
//! line or a depth and return new values. Nothing is mutated in place.

mod headline;
mod outline;

pub use headline::{Headline, NewHeadline};
pub use outline::{Outline, OutlineEntry};
