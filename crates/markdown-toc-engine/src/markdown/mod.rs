//! Line-local Markdown analysis.
//!
//! Headings are recognised one line at a time with regular expressions. There is
//! no block structure here: a heading-looking line inside a code fence is still a
//! heading.

pub mod anchor;
pub mod heading;

pub use anchor::slug;
pub use heading::{Heading, HeadingLine, MAX_LEVEL, MIN_LEVEL, classify, decompose, is_heading};
