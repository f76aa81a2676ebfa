// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line lexer used to find section boundaries in a calendar document.

use std::fmt::{self, Display};

use logos::Logos;

use crate::span::Span;

/// Tokenize a calendar document into line-level tokens
#[must_use]
pub fn tokenize<'src>(src: &'src str) -> impl Iterator<Item = SpannedToken<'src>> {
    Token::lexer(src).spanned().map(|(tok, span)| match tok {
        Ok(tok) => SpannedToken(tok, Span::from(span)),
        Err(()) => SpannedToken(Token::Error, Span::from(span)),
    })
}

/// Token emitted by the line lexer
#[derive(PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'a> {
    /// H2 heading line: optional spaces or tabs, exactly `##`, then a character
    /// that is neither `#` nor a line terminator
    #[regex(r"[ \t]*##[^#\r\n][^\r\n]*", priority = 10, allow_greedy = true)]
    Heading(&'a str),

    /// Any other non-empty line content
    #[regex(r"[^\r\n]+", priority = 1, allow_greedy = true)]
    Text(&'a str),

    /// Line terminator: `\r\n`, `\n` or a bare `\r`
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// Error token for lexing errors
    Error,
}

impl<'a> Token<'a> {
    /// Heading title: the text after the `##` marker, trimmed
    #[must_use]
    pub fn heading_title(&self) -> Option<&'a str> {
        match self {
            Self::Heading(line) => line
                .trim_start()
                .strip_prefix("##")
                .map(str::trim),
            _ => None,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(s) => write!(f, "Heading({s})"),
            Self::Text(s) => write!(f, "Text({s})"),
            Self::Newline => write!(f, "Newline"),
            Self::Error => write!(f, "Error"),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A token with its associated span in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'src>(pub Token<'src>, pub Span);

impl Display for SpannedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:?}", self.0, self.1)
    }
}
