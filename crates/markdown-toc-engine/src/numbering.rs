//! Hierarchical chapter numbers for level 2..6 headings.
//!
//! Numbers are derived from scratch on every run by folding the headings in
//! document order through [`NumberingState`]. Zero counters are left out of the
//! chapter string, so a heading that skips a level (`##` followed directly by
//! `####`) gets a number that a later sibling of the skipped level can repeat.

use std::sync::OnceLock;

use regex::Regex;

use crate::editing::{EditBatch, Editor, Notifier, Position, Range, TextDocument};
use crate::markdown::{Heading, MAX_LEVEL, MIN_LEVEL, classify, is_heading};

pub const NUMBERING_MESSAGE: &str = "Generated/Updated heading numbering!";

const LEVELS: usize = MAX_LEVEL - MIN_LEVEL + 1;

fn chapter_regex() -> &'static Regex {
    static CHAPTER_REGEX: OnceLock<Regex> = OnceLock::new();
    CHAPTER_REGEX.get_or_init(|| {
        Regex::new(r"^(\s*#{1,6})([0-9.\s]+)(.*)$").expect("Invalid chapter regex")
    })
}

/// Counters for levels 2..6 and the level of the last heading seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberingState {
    counters: [u32; LEVELS],
    previous_level: usize,
}

impl NumberingState {
    /// State after a heading of `level`, which must be within 2..=6.
    ///
    /// Moving to a shallower level clears every deeper counter before the
    /// counter for `level` is incremented.
    pub fn advance(self, level: usize) -> Self {
        debug_assert!((MIN_LEVEL..=MAX_LEVEL).contains(&level));
        let index = level - MIN_LEVEL;
        let mut counters = self.counters;
        if self.previous_level > level {
            counters[index + 1..].fill(0);
        }
        counters[index] += 1;
        Self {
            counters,
            previous_level: level,
        }
    }

    /// Dotted chapter number for `level`, skipping zero counters.
    pub fn chapter(&self, level: usize) -> String {
        self.counters[..=level - MIN_LEVEL]
            .iter()
            .filter(|counter| **counter != 0)
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn counters(&self) -> &[u32] {
        &self.counters
    }

    pub fn previous_level(&self) -> usize {
        self.previous_level
    }
}

/// The number a heading should carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterAssignment {
    pub line: usize,
    pub text: String,
    pub heading: Heading,
    pub target: String,
}

impl ChapterAssignment {
    pub fn needs_update(&self) -> bool {
        self.heading.is_unnumbered() || self.heading.chapter != self.target
    }
}

/// Computes the chapter number of every heading, top to bottom.
///
/// Headings that cannot be decomposed are skipped and do not advance the counters.
pub fn assign_chapters(document: &impl TextDocument) -> Vec<ChapterAssignment> {
    document
        .lines()
        .filter(|line| !line.is_empty_or_whitespace() && is_heading(&line.text))
        .filter_map(|line| {
            let heading = classify(&line.text).heading()?;
            let level = heading.numbered_level()?;
            Some((line, heading, level))
        })
        .scan(NumberingState::default(), |state, (line, heading, level)| {
            *state = state.advance(level);
            let target = state.chapter(level);
            log::debug!("Heading: {}, Should be: {target}", line.text);
            Some(ChapterAssignment {
                line: line.index,
                text: line.text.into_owned(),
                heading,
                target,
            })
        })
        .collect()
}

/// Rewrites the number of a heading line, keeping its marks and title.
///
/// Everything between the `#` marks and the title is replaced by the target
/// surrounded by single spaces.
pub fn renumber_line(line: &str, target: &str) -> Option<String> {
    let parts = chapter_regex().captures(line)?;
    let marks = parts.get(1).map_or("", |m| m.as_str());
    let rest = parts.get(3).map_or("", |m| m.as_str());
    Some(format!("{marks} {target} {rest}"))
}

/// One replacement per heading whose number differs from its target.
pub fn numbering_batch(document: &impl TextDocument) -> EditBatch {
    let mut batch = EditBatch::new();
    for assignment in assign_chapters(document)
        .into_iter()
        .filter(ChapterAssignment::needs_update)
    {
        if let Some(renumbered) = renumber_line(&assignment.text, &assignment.target) {
            let range = Range::new(
                Position::line_start(assignment.line),
                Position::new(assignment.line, assignment.text.len()),
            );
            batch.replace(range, renumbered);
        }
    }
    batch
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingOutcome {
    /// Number of heading lines rewritten.
    pub renumbered: usize,
}

/// Brings every heading number in the document up to date in one edit.
pub fn number_headings<E: Editor>(
    editor: &mut E,
    notifier: &impl Notifier,
) -> Result<NumberingOutcome, E::Error> {
    let batch = numbering_batch(editor.document());
    let renumbered = batch.len();
    if !batch.is_empty() {
        editor.edit(batch)?;
    }
    notifier.info(NUMBERING_MESSAGE);
    Ok(NumberingOutcome { renumbered })
}
