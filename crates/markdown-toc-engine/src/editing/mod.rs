/*!
 * # Editing seams
 *
 * The engine never owns the live document. It reads through [`TextDocument`],
 * writes through [`Editor::edit`] with a single [`EditBatch`] per command and
 * reports to the user through [`Notifier`].
 *
 * - **`host`**: the traits a host implements, plus [`LogNotifier`]
 * - **`edit`**: positions, ranges and edit batches
 * - **`buffer`**: [`Buffer`], an in-memory xi-rope editor used by the CLI and tests
 *
 * ```rust
 * use markdown_toc_engine::editing::{Buffer, EditBatch, Editor, Position, TextDocument};
 *
 * let mut buffer = Buffer::new("## Intro\n").with_cursor_line(0);
 * let mut batch = EditBatch::new();
 * batch.insert(Position::line_start(0), "# Title\n");
 * buffer.edit(batch).unwrap();
 * assert_eq!(buffer.text(), "# Title\n## Intro\n");
 * ```
 */

pub mod buffer;
pub mod edit;
pub mod host;

pub use buffer::{Buffer, EditError};
pub use edit::{EditBatch, Position, Range, TextEdit};
pub use host::{Editor, LogNotifier, Notifier, TextDocument, TextLine};
