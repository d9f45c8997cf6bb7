use std::sync::OnceLock;

use regex::Regex;

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

/// Builds the in-document link target for a heading.
///
/// The chapter and title are joined with a space, dots are dropped, every
/// whitespace run becomes a single `-` and the result is lowercased. Equal
/// headings produce equal anchors; nothing here makes them unique.
pub fn slug(chapter: &str, title: &str) -> String {
    let base = format!("{chapter} {title}").replace('.', "");
    whitespace_regex()
        .replace_all(&base, "-")
        .to_lowercase()
}
