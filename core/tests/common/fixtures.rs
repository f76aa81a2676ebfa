// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar document builders for integration tests.

/// Creates a minimal event entry with every required field.
///
/// # Example
///
/// ```ignore
/// let entry = event_entry("5", "Launch");
/// ```
#[must_use]
pub fn event_entry(day: &str, title: &str) -> String {
    format!(
        "### {day} {title}\n\
         - Topic: [Meetup] Rust\n\
         - Location: Online\n\
         - Summary: About {title}\n\
         - Description: Details of {title}\n"
    )
}

/// Creates a month section holding the given events.
#[must_use]
pub fn month_section(heading: &str, events: &[String]) -> String {
    let mut section = format!("## {heading}\n");
    for event in events {
        section.push('\n');
        section.push_str(event);
    }
    section
}

/// Builder for whole calendar documents.
#[derive(Debug, Default)]
pub struct CalendarBuilder {
    parts: Vec<String>,
}

impl CalendarBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends free text, such as a preamble or a non-month section
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.parts.push(text.to_owned());
        self
    }

    /// Appends a month section with one event per title, on consecutive days
    #[must_use]
    pub fn with_month(mut self, heading: &str, titles: &[&str]) -> Self {
        let events: Vec<_> = titles
            .iter()
            .zip(1..)
            .map(|(title, day)| event_entry(&day.to_string(), title))
            .collect();
        self.parts.push(month_section(heading, &events));
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.parts.join("\n")
    }
}
