use std::borrow::Cow;

use xi_rope::{DeltaBuilder, LinesMetric, Rope};

use super::{EditBatch, Editor, Position, TextDocument, TextLine};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Edit range ends before it starts: {start:?}..{end:?}")]
    InvertedRange { start: Position, end: Position },
    #[error("Edits overlap at byte offset {offset}")]
    Overlapping { offset: usize },
}

/// In-memory document with a cursor line.
///
/// The text lives in a single `xi_rope::Rope`. An [`EditBatch`] is compiled to
/// one delta and applied in one step, so a rejected batch leaves the buffer
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct Buffer {
    buffer: Rope,
    cursor_line: usize,
    version: u64,
}

struct ResolvedEdit {
    start: usize,
    end: usize,
    text: String,
}

impl Buffer {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            cursor_line: 0,
            version: 0,
        }
    }

    /// Create a buffer from raw bytes, rejecting invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    pub fn with_cursor_line(mut self, line: usize) -> Self {
        self.set_cursor_line(line);
        self
    }

    /// Move the cursor, clamped to the last line.
    pub fn set_cursor_line(&mut self, line: usize) {
        self.cursor_line = line.min(self.line_count().saturating_sub(1));
    }

    /// Number of batches applied so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn line_bounds(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.line_count() {
            return None;
        }
        let start = self.buffer.offset_of_line(index);
        let next = if index + 1 < self.line_count() {
            self.buffer.offset_of_line(index + 1)
        } else {
            self.buffer.len()
        };
        Some((start, next))
    }

    /// Byte offset for a position, clamped to the line and to the document end.
    fn offset_of(&self, position: Position) -> usize {
        let Some((start, _)) = self.line_bounds(position.line) else {
            return self.buffer.len();
        };
        let line_len = self
            .line_at(position.line)
            .map_or(0, |line| line.text.len());
        start + position.character.min(line_len)
    }

    fn resolve(&self, batch: EditBatch) -> Result<Vec<ResolvedEdit>, EditError> {
        let mut resolved = Vec::with_capacity(batch.len());
        for edit in batch {
            let range = edit.range();
            if range.end < range.start {
                return Err(EditError::InvertedRange {
                    start: range.start,
                    end: range.end,
                });
            }
            resolved.push(ResolvedEdit {
                start: self.offset_of(range.start),
                end: self.offset_of(range.end),
                text: edit.text().to_string(),
            });
        }

        resolved.sort_by_key(|edit| (edit.start, edit.end));
        if let Some(pair) = resolved.windows(2).find(|pair| pair[1].start < pair[0].end) {
            return Err(EditError::Overlapping {
                offset: pair[1].start,
            });
        }
        Ok(resolved)
    }
}

impl TextDocument for Buffer {
    fn line_count(&self) -> usize {
        self.buffer.measure::<LinesMetric>() + 1
    }

    fn line_at(&self, index: usize) -> Option<TextLine<'_>> {
        let (start, next) = self.line_bounds(index)?;
        let text = match self.buffer.slice_to_cow(start..next) {
            Cow::Borrowed(text) => Cow::Borrowed(strip_terminator(text)),
            Cow::Owned(text) => Cow::Owned(strip_terminator(&text).to_string()),
        };
        Some(TextLine { index, text })
    }

    fn text(&self) -> String {
        self.buffer.to_string()
    }
}

impl Editor for Buffer {
    type Document = Self;
    type Error = EditError;

    fn document(&self) -> &Self::Document {
        self
    }

    fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    fn edit(&mut self, batch: EditBatch) -> Result<(), Self::Error> {
        let resolved = self.resolve(batch)?;

        let mut builder = DeltaBuilder::new(self.buffer.len());
        for edit in resolved {
            builder.replace(edit.start..edit.end, Rope::from(edit.text));
        }
        self.buffer = builder.build().apply(&self.buffer);
        self.version += 1;
        self.set_cursor_line(self.cursor_line);
        Ok(())
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Range;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_count_counts_trailing_empty_line() {
        assert_eq!(Buffer::new("").line_count(), 1);
        assert_eq!(Buffer::new("a").line_count(), 1);
        assert_eq!(Buffer::new("a\nb\n").line_count(), 3);
    }

    #[test]
    fn test_line_at_strips_terminators() {
        let buffer = Buffer::new("one\r\ntwo\nthree");

        assert_eq!(buffer.line_at(0).unwrap().text, "one");
        assert_eq!(buffer.line_at(1).unwrap().text, "two");
        assert_eq!(buffer.line_at(2).unwrap().text, "three");
        assert!(buffer.line_at(3).is_none());
    }

    #[test]
    fn test_whitespace_line_detection() {
        let buffer = Buffer::new("text\n   \n");

        assert!(!buffer.line_at(0).unwrap().is_empty_or_whitespace());
        assert!(buffer.line_at(1).unwrap().is_empty_or_whitespace());
        assert!(buffer.line_at(2).unwrap().is_empty_or_whitespace());
    }

    #[test]
    fn test_from_bytes_invalid_utf8() {
        assert!(Buffer::from_bytes(&[0xFF, 0xFE, 0xFD]).is_err());
    }

    #[test]
    fn test_batch_applies_against_original_coordinates() {
        let mut buffer = Buffer::new("a\nb\nc\nd\n");
        let mut batch = EditBatch::new();
        batch
            .replace(Range::new(Position::new(3, 0), Position::new(3, 1)), "D")
            .delete(Range::lines(0, 1))
            .insert(Position::line_start(2), "inserted\n");

        buffer.edit(batch).unwrap();

        assert_eq!(buffer.text(), "b\ninserted\nc\nD\n");
        assert_eq!(buffer.version(), 1);
    }

    #[test]
    fn test_positions_past_end_are_clamped() {
        let mut buffer = Buffer::new("a\nb");
        let mut batch = EditBatch::new();
        batch.delete(Range::lines(1, 10));

        buffer.edit(batch).unwrap();

        assert_eq!(buffer.text(), "a\n");
    }

    #[test]
    fn test_overlapping_batch_is_rejected_whole() {
        let mut buffer = Buffer::new("a\nb\nc\n");
        let mut batch = EditBatch::new();
        batch
            .insert(Position::line_start(0), "first\n")
            .delete(Range::lines(0, 2))
            .delete(Range::lines(1, 3));

        let result = buffer.edit(batch);

        assert_eq!(result, Err(EditError::Overlapping { offset: 2 }));
        assert_eq!(buffer.text(), "a\nb\nc\n");
        assert_eq!(buffer.version(), 0);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut buffer = Buffer::new("a\nb\n");
        let mut batch = EditBatch::new();
        batch.delete(Range::lines(2, 1));

        assert!(matches!(
            buffer.edit(batch),
            Err(EditError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_cursor_is_clamped_after_shrinking_edit() {
        let mut buffer = Buffer::new("a\nb\nc\nd").with_cursor_line(3);
        let mut batch = EditBatch::new();
        batch.delete(Range::lines(1, 4));

        buffer.edit(batch).unwrap();

        assert_eq!(buffer.text(), "a\n");
        assert_eq!(buffer.cursor_line(), 1);
    }
}
