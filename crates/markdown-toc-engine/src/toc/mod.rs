//! Generated table of contents blocks.
//!
//! A block is the run of lines from [`TOC_START`] to [`TOC_END`]. Both markers
//! are written exactly as below so documents generated earlier keep being
//! recognised.

pub mod locate;
pub mod sync;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::editing::TextDocument;
use crate::markdown::{Heading, MIN_LEVEL, classify};

pub use locate::{TocBounds, TocLocation, locate};
pub use sync::{RemoveOutcome, TocOutcome, create_or_update_toc, remove_toc};

/// First line of a generated block.
pub const TOC_START: &str = "[comment]: # (---START_OF_TOC---)";
/// Last element of a generated block, padded with a blank line before and a newline after.
pub const TOC_END: &str = "\n[comment]: # (---END_OF_TOC---)\n";
pub const DEFAULT_INDENT_WIDTH: usize = 3;

/// How an update sizes the region it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceRange {
    /// Replace the detected block, start marker through end marker.
    #[default]
    Detected,
    /// Replace as many lines from the start marker as the freshly generated block spans.
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocSettings {
    /// Spaces per nesting level below level 2.
    pub indent_width: usize,
    pub replace_range: ReplaceRange,
}

impl Default for TocSettings {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            replace_range: ReplaceRange::default(),
        }
    }
}

/// List bullet for a heading level.
pub fn bullet(level: usize) -> &'static str {
    match level {
        2 => "* ",
        level if level > 2 => "- ",
        _ => "",
    }
}

/// One heading as it appears in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Zero-based source line of the heading.
    pub line: usize,
    pub level: usize,
    pub heading: Heading,
}

impl TocEntry {
    pub fn indent_level(&self) -> usize {
        self.level - MIN_LEVEL
    }

    pub fn render(&self, indent_width: usize) -> String {
        format!(
            "{}{}{} [{}](#{})",
            " ".repeat(indent_width * self.indent_level()),
            bullet(self.level),
            self.heading.chapter,
            self.heading.title,
            self.heading.anchor()
        )
    }
}

/// Rendered outline of every level 2..6 heading, wrapped in the block markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOfContents {
    entries: Vec<TocEntry>,
    lines: Vec<String>,
}

impl TableOfContents {
    pub fn build(document: &impl TextDocument, settings: &TocSettings) -> Self {
        Self::from_text(&document.text(), settings)
    }

    /// Scan `text` top to bottom; headings keep document order.
    pub fn from_text(text: &str, settings: &TocSettings) -> Self {
        let entries: Vec<TocEntry> = text
            .split('\n')
            .enumerate()
            .filter_map(|(line, content)| {
                let heading = classify(content).heading()?;
                let level = heading.numbered_level()?;
                Some(TocEntry {
                    line,
                    level,
                    heading,
                })
            })
            .collect();

        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(TOC_START.to_string());
        lines.extend(entries.iter().map(|entry| entry.render(settings.indent_width)));
        lines.push(TOC_END.to_string());

        Self { entries, lines }
    }

    pub fn entries(&self) -> &[TocEntry] {
        &self.entries
    }

    /// Block elements joined by `\n` when written; the last one is [`TOC_END`].
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// One per element plus one per newline embedded inside an element.
    ///
    /// The text written spans one line less than this, since it ends with a newline.
    pub fn line_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| 1 + line.matches('\n').count())
            .sum()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
