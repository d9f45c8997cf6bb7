use crate::editing::TextDocument;

use super::{TOC_END, TOC_START};

/// Line numbers of a block's start and end markers, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBounds {
    pub start: usize,
    pub end: usize,
}

impl TocBounds {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A block needs its end marker strictly below its start marker.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

/// Result of searching for the block around a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocLocation {
    pub bounds: Option<TocBounds>,
    /// The cursor line the search started from.
    pub context: usize,
}

pub fn is_start_marker(line: &str) -> bool {
    line.contains(TOC_START)
}

pub fn is_end_marker(line: &str) -> bool {
    line.contains(TOC_END.trim())
}

/// Finds the block that contains `cursor_line`, markers included.
///
/// Scans up from the cursor to the first line for a start marker, then down from
/// the cursor to the last line for an end marker. Both scans include the cursor
/// line. A start marker below the cursor is never considered.
pub fn locate(document: &impl TextDocument, cursor_line: usize) -> TocLocation {
    let bounds = find_start(document, cursor_line).and_then(|start| {
        find_end(document, cursor_line).map(|end| TocBounds::new(start, end))
    });

    log::debug!("TOC search from line {cursor_line}: {bounds:?}");

    TocLocation {
        bounds,
        context: cursor_line,
    }
}

fn find_start(document: &impl TextDocument, cursor_line: usize) -> Option<usize> {
    let last = document.line_count().checked_sub(1)?;
    for index in (0..=cursor_line.min(last)).rev() {
        let line = document.line_at(index)?;
        if is_start_marker(&line.text) {
            return Some(index);
        }
    }
    None
}

fn find_end(document: &impl TextDocument, cursor_line: usize) -> Option<usize> {
    for index in cursor_line..document.line_count() {
        let line = document.line_at(index)?;
        if is_end_marker(&line.text) {
            return Some(index);
        }
    }
    None
}
