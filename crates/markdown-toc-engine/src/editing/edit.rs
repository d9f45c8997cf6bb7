/// A point in a document: zero-based line and byte column within that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Start of `line`.
    pub fn line_start(line: usize) -> Self {
        Self::new(line, 0)
    }
}

/// Half-open span `[start, end)` between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whole lines `[first, end_line)`, including the terminator of the last one.
    pub fn lines(first: usize, end_line: usize) -> Self {
        Self::new(Position::line_start(first), Position::line_start(end_line))
    }
}

/// One change within an [`EditBatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Replace { range: Range, text: String },
    Insert { at: Position, text: String },
    Delete { range: Range },
}

impl TextEdit {
    /// The span of the original document this edit consumes.
    pub fn range(&self) -> Range {
        match self {
            TextEdit::Replace { range, .. } | TextEdit::Delete { range } => *range,
            TextEdit::Insert { at, .. } => Range::new(*at, *at),
        }
    }

    /// Text written in place of [`TextEdit::range`].
    pub fn text(&self) -> &str {
        match self {
            TextEdit::Replace { text, .. } | TextEdit::Insert { text, .. } => text,
            TextEdit::Delete { .. } => "",
        }
    }
}

/// Edits that an [`Editor`](super::Editor) applies together or not at all.
///
/// All ranges refer to the document as it was before the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, range: Range, text: impl Into<String>) -> &mut Self {
        self.edits.push(TextEdit::Replace {
            range,
            text: text.into(),
        });
        self
    }

    pub fn insert(&mut self, at: Position, text: impl Into<String>) -> &mut Self {
        self.edits.push(TextEdit::Insert {
            at,
            text: text.into(),
        });
        self
    }

    pub fn delete(&mut self, range: Range) -> &mut Self {
        self.edits.push(TextEdit::Delete { range });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }
}

impl IntoIterator for EditBatch {
    type Item = TextEdit;
    type IntoIter = std::vec::IntoIter<TextEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}
