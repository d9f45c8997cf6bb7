//! Seams between the engine and whatever owns the live document.

use std::borrow::Cow;

use super::EditBatch;

/// One line of a document without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine<'a> {
    pub index: usize,
    pub text: Cow<'a, str>,
}

impl TextLine<'_> {
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Read access to a document as a sequence of lines.
pub trait TextDocument {
    /// Number of lines, counting the (possibly empty) line after a final newline.
    fn line_count(&self) -> usize;

    fn line_at(&self, index: usize) -> Option<TextLine<'_>>;

    /// Whole document text.
    fn text(&self) -> String;

    fn lines(&self) -> impl Iterator<Item = TextLine<'_>> {
        (0..self.line_count()).filter_map(|index| self.line_at(index))
    }
}

/// An editing surface with a cursor that applies edit batches atomically.
pub trait Editor {
    type Document: TextDocument;
    /// Failure reported by the editor when a batch is rejected.
    type Error;

    fn document(&self) -> &Self::Document;

    /// Zero-based line holding the active cursor.
    fn cursor_line(&self) -> usize;

    fn edit(&mut self, batch: EditBatch) -> Result<(), Self::Error>;
}

/// User-facing messages. Nothing is returned and nothing is retried.
pub trait Notifier {
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Sends notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warning(&self, message: &str) {
        log::warn!("{message}");
    }
}
