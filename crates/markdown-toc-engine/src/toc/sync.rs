use crate::editing::{EditBatch, Editor, Notifier, Position, Range, TextDocument};

use super::locate::{TocBounds, is_start_marker, locate};
use super::{ReplaceRange, TableOfContents, TocSettings};

pub const UPDATING_MESSAGE: &str = "Updating existing Table of Contents!";
pub const CREATING_MESSAGE: &str = "Creating new Table of Contents!";
pub const REMOVED_MESSAGE: &str = "Removed Table of Contents!";
pub const NOT_FOUND_MESSAGE: &str = "No Table of Contents found near cursor!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocOutcome {
    /// A new block was inserted at this line.
    Created { at: usize },
    /// The block at these bounds was regenerated.
    Updated { bounds: TocBounds },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { bounds: TocBounds },
    /// No block around the cursor; the document was left alone.
    NotFound,
    /// The given range is inverted or its start line holds no start marker; the
    /// document was left alone.
    Stale { line: usize },
}

/// Regenerates the block around the cursor, or inserts a new one at the cursor line.
pub fn create_or_update_toc<E: Editor>(
    editor: &mut E,
    notifier: &impl Notifier,
    settings: &TocSettings,
) -> Result<TocOutcome, E::Error> {
    let location = locate(editor.document(), editor.cursor_line());
    let toc = TableOfContents::build(editor.document(), settings);

    match location.bounds.filter(TocBounds::is_valid) {
        Some(bounds) => {
            notifier.info(UPDATING_MESSAGE);
            editor.edit(update_batch(bounds, &toc, settings.replace_range))?;
            Ok(TocOutcome::Updated { bounds })
        }
        None => {
            notifier.info(CREATING_MESSAGE);
            editor.edit(insert_batch(location.context, &toc))?;
            Ok(TocOutcome::Created {
                at: location.context,
            })
        }
    }
}

/// Batch replacing an existing block with `toc`.
pub fn update_batch(bounds: TocBounds, toc: &TableOfContents, strategy: ReplaceRange) -> EditBatch {
    let range = match strategy {
        ReplaceRange::Detected => Range::lines(bounds.start, bounds.end + 1),
        ReplaceRange::Generated => Range::lines(bounds.start, bounds.start + toc.line_count() - 1),
    };
    let mut batch = EditBatch::new();
    batch.replace(range, toc.to_string());
    batch
}

/// Batch inserting `toc` in front of `line`.
pub fn insert_batch(line: usize, toc: &TableOfContents) -> EditBatch {
    let mut batch = EditBatch::new();
    batch.insert(Position::line_start(line), toc.to_string());
    batch
}

/// Deletes a block, markers included.
///
/// With `bounds` given they are trusted only if the start line still holds a
/// start marker; otherwise the block around the cursor is used.
pub fn remove_toc<E: Editor>(
    editor: &mut E,
    notifier: &impl Notifier,
    bounds: Option<TocBounds>,
) -> Result<RemoveOutcome, E::Error> {
    let bounds = match bounds {
        Some(bounds) => bounds,
        None => match locate(editor.document(), editor.cursor_line()).bounds {
            Some(bounds) => bounds,
            None => {
                notifier.warning(NOT_FOUND_MESSAGE);
                return Ok(RemoveOutcome::NotFound);
            }
        },
    };

    if bounds.end < bounds.start {
        notifier.warning(&format!(
            "Table of Contents end marker at line {} is above its start marker at line {}!",
            bounds.end + 1,
            bounds.start + 1
        ));
        return Ok(RemoveOutcome::Stale { line: bounds.start });
    }

    let holds_start = editor
        .document()
        .line_at(bounds.start)
        .is_some_and(|line| is_start_marker(&line.text));
    if !holds_start {
        notifier.warning(&format!(
            "Table of Contents start marker not found at line {}!",
            bounds.start + 1
        ));
        return Ok(RemoveOutcome::Stale { line: bounds.start });
    }

    let mut batch = EditBatch::new();
    batch.delete(Range::lines(bounds.start, bounds.end + 1));
    editor.edit(batch)?;
    notifier.info(REMOVED_MESSAGE);
    Ok(RemoveOutcome::Removed { bounds })
}
