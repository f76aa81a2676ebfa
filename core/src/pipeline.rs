// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evcal_grammar::{Document, Grammar, split};

use crate::config::Config;
use crate::error::{RunError, SectionError};
use crate::event::Event;
use crate::filter::MonthFilter;
use crate::projector::project;

/// Converts a whole calendar document into events.
///
/// Sections are split at H2 headings, filtered down to month sections,
/// parsed and projected in document order. The first section that fails to
/// parse aborts the run.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    grammar: Grammar,
    filter: MonthFilter,
}

impl Pipeline {
    /// Create a pipeline from its parts
    #[must_use]
    pub fn new(grammar: Grammar, filter: MonthFilter) -> Self {
        Self { grammar, filter }
    }

    /// Create a pipeline from configuration.
    ///
    /// ## Errors
    /// If the configured month pattern is not a valid regex.
    pub fn from_config(config: &Config) -> Result<Self, RunError> {
        let filter = match &config.month_pattern {
            Some(pattern) => MonthFilter::with_pattern(pattern).map_err(|source| {
                RunError::InvalidMonthPattern {
                    pattern: pattern.clone(),
                    source,
                }
            })?,
            None => MonthFilter::default(),
        };
        Ok(Self::new(Grammar::new(), filter))
    }

    /// The grammar month sections are parsed with
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// The filter selecting month sections
    #[must_use]
    pub fn filter(&self) -> &MonthFilter {
        &self.filter
    }

    /// Parse every month section of `raw`, without projecting.
    ///
    /// ## Errors
    /// The first month section that does not conform to the grammar.
    #[tracing::instrument(skip_all, fields(len = raw.len()))]
    pub fn documents(&self, raw: &str) -> Result<Vec<Document>, RunError> {
        let sections = self.filter.filter(split(raw));
        tracing::debug!(count = sections.len(), "month sections selected");

        let mut documents = Vec::with_capacity(sections.len());
        for section in sections {
            match self.grammar.parse(&section.text) {
                Ok(doc) => {
                    tracing::debug!(
                        month = %doc.month,
                        year = doc.year,
                        events = doc.events.len(),
                        "parsed month section"
                    );
                    documents.push(doc);
                }
                Err(source) => {
                    let err = SectionError {
                        title: section.title_or_empty().to_owned(),
                        start_line: section.start_line,
                        text: section.text,
                        source,
                    };
                    tracing::debug!(line = err.absolute_line(), "month section failed to parse");
                    return Err(err.into());
                }
            }
        }

        tracing::info!(sections = documents.len(), "calendar parsed");
        Ok(documents)
    }

    /// Convert `raw` into events, in section order then source order.
    ///
    /// ## Errors
    /// The first month section that does not conform to the grammar; no
    /// events are returned in that case.
    #[tracing::instrument(skip_all, fields(len = raw.len()))]
    pub fn run(&self, raw: &str) -> Result<Vec<Event>, RunError> {
        let events: Vec<_> = self
            .documents(raw)?
            .into_iter()
            .flat_map(project)
            .collect();

        tracing::info!(events = events.len(), "events projected");
        Ok(events)
    }
}

/// Convert `raw` into events with the default pipeline.
///
/// ## Errors
/// See [`Pipeline::run`].
pub fn run(raw: &str) -> Result<Vec<Event>, RunError> {
    Pipeline::default().run(raw)
}
