// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt::{self, Display};

use chumsky::error::Rich;

use crate::span::Span;

/// 1-based line and column inside the parsed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line, starting at 1
    pub line: usize,
    /// Column in characters, starting at 1
    pub column: usize,
}

impl Position {
    /// Locate a byte offset in `src`
    #[must_use]
    pub fn of(src: &str, offset: usize) -> Self {
        let before = src.get(..offset).unwrap_or(src);
        let line = before.matches('\n').count() + 1;
        let column = before
            .rsplit('\n')
            .next()
            .map_or(0, |l| l.chars().count())
            + 1;
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Section text did not conform to the event grammar.
///
/// Raised at the first failure; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable message, including the line and column
    pub message: String,

    /// Where parsing failed
    pub location: Position,

    /// Byte span of the offending input
    pub span: Span,

    /// Grammar tokens or constructs that would have been accepted, sorted
    pub expected: Vec<String>,

    /// What was found instead, `None` at end of input
    pub found: Option<String>,
}

impl ParseError {
    pub(crate) fn from_rich(src: &str, err: &Rich<'_, char>) -> Self {
        let span = Span::from(*err.span());
        let expected = err
            .expected()
            .map(ToString::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        // A failed value check covers the whole value, not just its first char
        let covered = src.get(span.into_range()).filter(|s| s.chars().nth(1).is_some());
        let found = match (covered, err.found()) {
            (Some(text), _) => Some(text.to_owned()),
            (None, Some(c)) => Some(c.to_string()),
            (None, None) if span.is_empty() => src
                .get(span.start..)
                .and_then(|s| s.chars().next())
                .map(String::from),
            (None, None) => src.get(span.into_range()).map(str::to_owned),
        };

        Self::new(src, span, expected, found)
    }

    /// Reached end of the grammar with no diagnostic from the parser
    pub(crate) fn unknown(src: &str) -> Self {
        let span = Span::new(src.len(), src.len());
        Self::new(src, span, Vec::new(), None)
    }

    fn new(src: &str, span: Span, expected: Vec<String>, found: Option<String>) -> Self {
        let location = Position::of(src, span.start);
        let message = format!(
            "{location}: unexpected {}{}",
            found
                .as_deref()
                .map_or_else(|| "end of input".to_owned(), |f| format!("{f:?}")),
            match expected.as_slice() {
                [] => String::new(),
                [one] => format!(", expected {one}"),
                many => format!(", expected one of {}", many.join(", ")),
            },
        );

        Self {
            message,
            location,
            span,
            expected,
            found,
        }
    }
}
