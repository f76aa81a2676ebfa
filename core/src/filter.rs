// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::OnceLock;

use evcal_grammar::Section;
use regex::Regex;

/// Default month title pattern: a word followed by a number, anywhere in the
/// title
pub const DEFAULT_MONTH_PATTERN: &str = r"\w+\s*\d+";

/// Selects the sections that hold month event listings
#[derive(Debug, Clone)]
pub struct MonthFilter {
    pattern: Regex,
}

impl MonthFilter {
    /// Filter using [`DEFAULT_MONTH_PATTERN`]
    #[must_use]
    pub fn new() -> Self {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let pattern = REGEX.get_or_init(|| Regex::new(DEFAULT_MONTH_PATTERN).unwrap());
        Self {
            pattern: pattern.clone(),
        }
    }

    /// Filter using a custom title pattern.
    ///
    /// ## Errors
    /// If `pattern` is not a valid regex.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(|pattern| Self { pattern })
    }

    /// The title pattern in use
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether a section with this title is a month section; an untitled
    /// section is checked as the empty title
    #[must_use]
    pub fn is_month(&self, title: Option<&str>) -> bool {
        self.pattern.is_match(title.unwrap_or_default())
    }

    /// Keep the month sections, in order
    #[must_use]
    pub fn filter(&self, sections: Vec<Section>) -> Vec<Section> {
        sections
            .into_iter()
            .filter(|section| {
                let keep = self.is_month(section.title.as_deref());
                if keep {
                    tracing::debug!(
                        title = section.title_or_empty(),
                        line = section.start_line,
                        "month section"
                    );
                } else {
                    tracing::debug!(
                        title = ?section.title,
                        line = section.start_line,
                        "skipping section"
                    );
                }
                keep
            })
            .collect()
    }
}

impl Default for MonthFilter {
    fn default() -> Self {
        Self::new()
    }
}
