// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Split a calendar document into sections at H2 heading boundaries.

use crate::lexer::{SpannedToken, Token, tokenize};

/// A contiguous run of source lines opened by an H2 heading, or by the start
/// of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Heading text after the `##` marker, trimmed; `None` for the lines
    /// before the first heading
    pub title: Option<String>,

    /// 1-based source line of the section's first line
    pub start_line: usize,

    /// The section's lines, heading included, joined with `\n`
    pub text: String,
}

impl Section {
    /// Title, with an untitled section reading as the empty string
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Split `src` into sections in document order.
///
/// Never fails: every line of the input lands in exactly one section, and
/// every line terminator (`\r\n`, `\n` or `\r`) is normalized to `\n`.
#[must_use]
pub fn split(src: &str) -> Vec<Section> {
    let mut splitter = Splitter::default();
    let mut line: Option<Token<'_>> = None;
    for SpannedToken(token, span) in tokenize(src) {
        match token {
            Token::Newline => splitter.push_line(line.take()),
            Token::Error => {
                let text = src.get(span.into_range()).unwrap_or_default();
                line = Some(Token::Text(text));
            }
            token => line = Some(token),
        }
    }
    splitter.push_line(line);
    splitter.sections
}

#[derive(Debug, Default)]
struct Splitter {
    sections: Vec<Section>,
    line_no: usize,
}

impl Splitter {
    fn push_line(&mut self, line: Option<Token<'_>>) {
        self.line_no += 1;
        if let Some(token @ Token::Heading(text)) = line {
            self.sections.push(Section {
                title: token.heading_title().map(str::to_owned),
                start_line: self.line_no,
                text: text.to_owned(),
            });
            return;
        }

        let text = match line {
            Some(Token::Text(s)) => s,
            _ => "",
        };
        match self.sections.last_mut() {
            Some(section) => {
                section.text.push('\n');
                section.text.push_str(text);
            }
            None => self.sections.push(Section {
                title: None,
                start_line: self.line_no,
                text: text.to_owned(),
            }),
        }
    }
}
