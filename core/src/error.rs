// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evcal_grammar::ParseError;

/// A month section failed to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("section `{title}` starting at line {start_line}: {source}")]
pub struct SectionError {
    /// Title of the failing section
    pub title: String,

    /// 1-based line of the section heading in the whole document
    pub start_line: usize,

    /// Text of the failing section, as handed to the grammar
    pub text: String,

    /// Error reported by the grammar, located within `text`
    pub source: ParseError,
}

impl SectionError {
    /// Line of the failure in the whole document, 1-based
    #[must_use]
    pub fn absolute_line(&self) -> usize {
        self.start_line + self.source.location.line - 1
    }
}

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A month section did not conform to the grammar. Raised for the first
    /// such section; no events are produced.
    #[error(transparent)]
    Parse(#[from] SectionError),

    /// The configured month pattern is not a valid regex
    #[error("invalid month pattern `{pattern}`: {source}")]
    InvalidMonthPattern {
        /// Pattern as configured
        pattern: String,
        /// Why the regex was rejected
        source: regex::Error,
    },
}
