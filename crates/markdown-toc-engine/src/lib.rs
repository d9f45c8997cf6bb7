pub mod commands;
pub mod editing;
pub mod io;
pub mod markdown;
pub mod numbering;
pub mod toc;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use commands::{Cmd, Outcome};
pub use editing::{Buffer, EditBatch, EditError, Editor, LogNotifier, Notifier, TextDocument};
pub use markdown::{Heading, HeadingLine};
pub use numbering::{NumberingOutcome, number_headings};
pub use toc::{
    RemoveOutcome, ReplaceRange, TableOfContents, TocBounds, TocOutcome, TocSettings,
    create_or_update_toc, locate, remove_toc,
};
