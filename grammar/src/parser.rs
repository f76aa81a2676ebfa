// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::ast::Document;
use crate::error::ParseError;
use crate::syntax::syntax_analysis;

/// Version of the event grammar understood by [`Grammar`]
pub const GRAMMAR_VERSION: &str = "1";

/// Compiled event grammar.
///
/// The grammar holds no state between parses, so one value can be shared by
/// any number of callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grammar {
    _private: (),
}

impl Grammar {
    /// Create the grammar
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Grammar version, see [`GRAMMAR_VERSION`]
    #[must_use]
    pub const fn version(&self) -> &'static str {
        GRAMMAR_VERSION
    }

    /// Parse one month section into a [`Document`].
    ///
    /// ## Errors
    /// Returns the first point where `src` departs from the grammar.
    pub fn parse(&self, src: &str) -> Result<Document, ParseError> {
        syntax_analysis(src).map_err(|errs| {
            errs.iter()
                .min_by_key(|err| err.span().start)
                .map_or_else(|| ParseError::unknown(src), |err| ParseError::from_rich(src, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_version() {
        assert_eq!(Grammar::new().version(), GRAMMAR_VERSION);
        assert_eq!(Grammar::default(), Grammar::new());
    }

    #[test]
    fn parses_empty_month() {
        let doc = Grammar::new().parse("## April 2025\n\n").unwrap();
        assert_eq!(doc.year, 2025);
        assert_eq!(doc.month, "April");
        assert!(doc.events.is_empty());
    }

    #[test]
    fn error_points_at_offending_line() {
        let src = "## April 2025\n\n### x Launch\n";
        let err = Grammar::new().parse(src).unwrap_err();
        assert_eq!(err.location.line, 3);
        assert!(err.message.starts_with("line 3, column "));
    }
}
