use std::sync::OnceLock;

use regex::Regex;

use super::anchor;

/// Lowest heading level that takes part in the TOC and numbering.
pub const MIN_LEVEL: usize = 2;
/// Deepest heading level that takes part in the TOC and numbering.
pub const MAX_LEVEL: usize = 6;

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| {
        Regex::new(r"^\s{0,3}#{2,6}\s+\S").expect("Invalid heading regex")
    })
}

fn heading_parts_regex() -> &'static Regex {
    static HEADING_PARTS_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_PARTS_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(#+)\s([0-9.]*)\s*(.+)$").expect("Invalid heading parts regex")
    })
}

/// A heading line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` marks, or `-1` for an unparseable heading
    pub level: i32,
    /// Existing dotted chapter number, empty when the heading is unnumbered
    pub chapter: String,
    /// Heading text without chapter number and surrounding whitespace
    pub title: String,
}

impl Heading {
    /// Sentinel parts used when a heading line cannot be decomposed.
    pub fn unparseable() -> Self {
        Self {
            level: -1,
            chapter: "?".to_string(),
            title: "?".to_string(),
        }
    }

    /// Heading level as an index into the numbered range, `None` outside 2..=6.
    pub fn numbered_level(&self) -> Option<usize> {
        usize::try_from(self.level)
            .ok()
            .filter(|level| (MIN_LEVEL..=MAX_LEVEL).contains(level))
    }

    /// True when the heading carries no chapter number.
    pub fn is_unnumbered(&self) -> bool {
        self.chapter.is_empty()
    }

    /// Link target for this heading, see [`anchor::slug`].
    pub fn anchor(&self) -> String {
        anchor::slug(&self.chapter, &self.title)
    }
}

/// Result of looking at a single line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingLine {
    Heading(Heading),
    NotAHeading,
    /// Looked like a heading but could not be split into parts.
    Unparseable,
}

impl HeadingLine {
    /// The parsed heading, if this line was one.
    pub fn heading(self) -> Option<Heading> {
        match self {
            HeadingLine::Heading(heading) => Some(heading),
            HeadingLine::NotAHeading | HeadingLine::Unparseable => None,
        }
    }
}

/// Whether `line` is a level 2..6 ATX heading with some text after the marks.
pub fn is_heading(line: &str) -> bool {
    heading_regex().is_match(line)
}

/// Classifies a line and splits it when it is a heading.
pub fn classify(line: &str) -> HeadingLine {
    if !is_heading(line) {
        return HeadingLine::NotAHeading;
    }
    decompose(line)
}

/// Splits a line into level, chapter and title without checking it is a heading first.
pub fn decompose(line: &str) -> HeadingLine {
    let Some(parts) = heading_parts_regex().captures(line) else {
        return HeadingLine::Unparseable;
    };

    let marks = parts.get(1).map_or("", |m| m.as_str());
    let Ok(level) = i32::try_from(marks.len()) else {
        return HeadingLine::Unparseable;
    };

    HeadingLine::Heading(Heading {
        level,
        chapter: parts.get(2).map_or("", |m| m.as_str()).to_string(),
        title: parts.get(3).map_or("", |m| m.as_str()).trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("## Intro", true)]
    #[case("   ###### Deep", true)]
    #[case("    ## Code block indent", false)]
    #[case("# Title", false)]
    #[case("####### Too deep", false)]
    #[case("##NoSpace", false)]
    #[case("##   ", false)]
    #[case("Text with ## inside", false)]
    #[case("[comment]: # (---START_OF_TOC---)", false)]
    #[case("* 1 [Intro](#1-intro)", false)]
    fn test_heading_detection(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_heading(line), expected, "line: {line:?}");
    }

    #[test]
    fn test_classify_numbered_heading() {
        let heading = classify("## 2.1 Getting Started").heading().unwrap();

        assert_eq!(
            heading,
            Heading {
                level: 2,
                chapter: "2.1".to_string(),
                title: "Getting Started".to_string(),
            }
        );
        assert_eq!(heading.anchor(), "21-getting-started");
    }

    #[test]
    fn test_classify_unnumbered_heading() {
        let heading = classify("### Details  ").heading().unwrap();

        assert_eq!(heading.level, 3);
        assert!(heading.is_unnumbered());
        assert_eq!(heading.title, "Details");
    }

    #[test]
    fn test_level_ignores_leading_whitespace() {
        let heading = classify("  #### Indented").heading().unwrap();

        assert_eq!(heading.level, 4);
        assert_eq!(heading.numbered_level(), Some(4));
    }

    #[test]
    fn test_classify_rejects_level_one() {
        assert_eq!(classify("# Document title"), HeadingLine::NotAHeading);
    }

    #[test]
    fn test_decompose_without_marks_is_unparseable() {
        assert_eq!(decompose("plain text"), HeadingLine::Unparseable);
        assert_eq!(decompose("##"), HeadingLine::Unparseable);
    }

    #[test]
    fn test_unparseable_sentinels() {
        let heading = Heading::unparseable();

        assert_eq!(heading.level, -1);
        assert_eq!(heading.chapter, "?");
        assert_eq!(heading.title, "?");
        assert_eq!(heading.numbered_level(), None);
    }

    #[test]
    fn test_trailing_dot_stays_in_chapter() {
        let heading = classify("## 3. Results").heading().unwrap();

        assert_eq!(heading.chapter, "3.");
        assert_eq!(heading.title, "Results");
    }
}
