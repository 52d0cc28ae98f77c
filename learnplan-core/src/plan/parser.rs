//! Plan text parser
//!
//! Splits a generator reply into titled sections. The reply is free-form, so
//! the parser never fails: anything it does not recognise becomes body text
//! of the current section.

use serde::{Deserialize, Serialize};

/// Title used when text appears before any heading
pub const DEFAULT_SECTION_TITLE: &str = "Plan";

/// One titled block of a parsed learning plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSection {
    /// Section title (e.g. "Day 1", "Key Topics")
    pub title: String,
    /// Bullet items, in source order
    pub bullets: Vec<String>,
    /// Plain body lines, in source order
    pub body: Vec<String>,
}

impl PlanSection {
    /// Create an empty section with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bullets: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Whether the section has neither body lines nor bullets
    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty() && self.body.is_empty()
    }
}

/// Classification of a single trimmed, non-blank line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    /// `N. Title`
    Heading(&'a str),
    /// `- item`, `• item`, `* item`, `N) item`
    Bullet(&'a str),
    /// Anything else
    Body(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(title) = heading_title(line) {
            Line::Heading(title)
        } else if let Some(item) = bullet_item(line) {
            Line::Bullet(item)
        } else {
            Line::Body(line)
        }
    }
}

/// Strip a run of leading ASCII digits, returning `None` if there were none
fn strip_number(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    (rest.len() < line.len()).then_some(rest)
}

/// Match `digits '.' whitespace* rest` where `rest` is non-empty.
///
/// Whitespace after the period is optional, so "2.5 times as fast" reads as
/// a heading titled "5 times as fast".
fn heading_title(line: &str) -> Option<&str> {
    let title = strip_number(line)?.strip_prefix('.')?.trim_start_matches(is_space);
    (!title.is_empty()).then_some(title)
}

/// Match a leading bullet marker and return the text after it
fn bullet_item(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix(['-', '•', '*'])
        .or_else(|| strip_number(line)?.strip_prefix(')'))?;
    Some(rest.trim_start_matches(is_space))
}

/// Whitespace, counting the byte-order mark
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn trim_line(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Fold state: finished sections plus the one currently open
#[derive(Debug, Default)]
struct Accumulator {
    sections: Vec<PlanSection>,
    current: Option<PlanSection>,
}

impl Accumulator {
    fn push(mut self, line: Line<'_>) -> Self {
        match line {
            Line::Heading(title) => {
                self.sections.extend(self.current.take());
                self.current = Some(PlanSection::new(title));
            }
            Line::Bullet(item) => self.open().bullets.push(item.to_string()),
            Line::Body(text) => self.open().body.push(text.to_string()),
        }
        self
    }

    /// The open section, starting the default one if nothing is open yet
    fn open(&mut self) -> &mut PlanSection {
        self.current
            .get_or_insert_with(|| PlanSection::new(DEFAULT_SECTION_TITLE))
    }

    fn finish(mut self) -> Vec<PlanSection> {
        self.sections.extend(self.current.take());
        if self.sections.is_empty() {
            self.sections.push(PlanSection::new(DEFAULT_SECTION_TITLE));
        }
        self.sections
    }
}

/// Parse generator output into display sections.
///
/// Always returns at least one section. Blank lines are ignored; CRLF and LF
/// line endings are treated alike. A byte-order mark counts as whitespace.
pub fn parse_plan(text: &str) -> Vec<PlanSection> {
    text.lines()
        .map(trim_line)
        .filter(|line| !line.is_empty())
        .map(Line::classify)
        .fold(Accumulator::default(), Accumulator::push)
        .finish()
}
