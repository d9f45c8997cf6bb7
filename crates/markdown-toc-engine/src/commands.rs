//! The three user-facing commands, each operating on the active editor at its cursor.

use crate::editing::{Editor, Notifier};
use crate::numbering::{NumberingOutcome, number_headings};
use crate::toc::{
    RemoveOutcome, TocBounds, TocOutcome, TocSettings, create_or_update_toc, remove_toc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Regenerate the TOC around the cursor, or insert one at the cursor.
    GenerateToc,
    /// Delete the TOC given by `bounds`, or the one around the cursor.
    RemoveToc { bounds: Option<TocBounds> },
    /// Rewrite every heading's chapter number.
    NumberHeadings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Toc(TocOutcome),
    Removed(RemoveOutcome),
    Numbered(NumberingOutcome),
}

impl Outcome {
    /// Whether the command sent an edit to the editor.
    pub fn changed_document(&self) -> bool {
        match self {
            Outcome::Toc(_) => true,
            Outcome::Removed(outcome) => matches!(outcome, RemoveOutcome::Removed { .. }),
            Outcome::Numbered(outcome) => outcome.renumbered > 0,
        }
    }
}

impl Cmd {
    /// Run against `editor`. Editor failures are returned as they were reported.
    pub fn run<E: Editor>(
        self,
        editor: &mut E,
        notifier: &impl Notifier,
        settings: &TocSettings,
    ) -> Result<Outcome, E::Error> {
        log::debug!("Running {self:?} at line {}", editor.cursor_line());
        match self {
            Cmd::GenerateToc => create_or_update_toc(editor, notifier, settings).map(Outcome::Toc),
            Cmd::RemoveToc { bounds } => remove_toc(editor, notifier, bounds).map(Outcome::Removed),
            Cmd::NumberHeadings => number_headings(editor, notifier).map(Outcome::Numbered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::{Buffer, TextDocument};
    use crate::tests::RecordingNotifier;

    #[test]
    fn test_number_then_generate() {
        let mut buffer = Buffer::new("# Title\n\n## A\n### B\n").with_cursor_line(1);
        let notifier = RecordingNotifier::default();
        let settings = TocSettings::default();

        Cmd::NumberHeadings.run(&mut buffer, &notifier, &settings).unwrap();
        let outcome = Cmd::GenerateToc.run(&mut buffer, &notifier, &settings).unwrap();

        assert_eq!(outcome, Outcome::Toc(TocOutcome::Created { at: 1 }));
        insta::assert_snapshot!(buffer.text(), @r###"
        # Title
        [comment]: # (---START_OF_TOC---)
        * 1 [A](#1-a)
           - 1.1 [B](#11-b)

        [comment]: # (---END_OF_TOC---)

        ## 1 A
        ### 1.1 B
        "###);
    }

    #[test]
    fn test_remove_outside_block_reports_unchanged() {
        let mut buffer = Buffer::new("## A\n");
        let notifier = RecordingNotifier::default();

        let outcome = Cmd::RemoveToc { bounds: None }
            .run(&mut buffer, &notifier, &TocSettings::default())
            .unwrap();

        assert_eq!(outcome, Outcome::Removed(RemoveOutcome::NotFound));
        assert!(!outcome.changed_document());
        assert_eq!(buffer.line_count(), 2);
    }
}
