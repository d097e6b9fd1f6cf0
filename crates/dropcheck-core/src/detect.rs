use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// "drop", one whitespace run, then the object keyword. No word boundaries:
// anything containing the literal sequence counts.
static DROP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)drop\s+(table|column)").expect("drop pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Table,
    Column,
}

impl fmt::Display for DropKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// The first destructive statement found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropStatement {
    pub kind: DropKind,
    /// 1-based line of the match.
    pub line: usize,
    /// The matched text as it appears in the source, e.g. `DROP  COLUMN`.
    pub text: String,
}

/// Returns `true` if `content` contains a `drop table` or `drop column`
/// sequence in any letter case.
#[must_use]
pub fn contains_drop(content: &str) -> bool {
    DROP_PATTERN.is_match(content)
}

#[must_use]
pub fn find_drop(content: &str) -> Option<DropStatement> {
    let captures = DROP_PATTERN.captures(content)?;
    let whole = captures.get(0)?;
    let keyword = captures.get(1)?;

    let kind = if keyword.as_str().eq_ignore_ascii_case("table") {
        DropKind::Table
    } else {
        DropKind::Column
    };

    let line = content[..whole.start()].matches('\n').count() + 1;

    Some(DropStatement {
        kind,
        line,
        text: whole.as_str().to_string(),
    })
}
