// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt, io, ops::Range};

use ariadne::{Color, Label, Report, ReportKind, Source};
use evcal_core::SectionError;

/// A section parse error, ready to be rendered against its input
#[derive(Debug)]
pub struct SectionReport {
    source_name: String,
    error: SectionError,
}

impl SectionReport {
    /// Pair the error with the name of the input it came from
    pub fn new(source_name: impl Into<String>, error: SectionError) -> Self {
        Self {
            source_name: source_name.into(),
            error,
        }
    }

    /// The wrapped error
    pub fn error(&self) -> &SectionError {
        &self.error
    }

    /// Print the report to stderr, colored
    ///
    /// ## Errors
    /// If stderr cannot be written.
    pub fn eprint(&self) -> io::Result<()> {
        self.write(io::stderr(), true)
    }

    /// Write the report to `w`
    ///
    /// ## Errors
    /// If `w` cannot be written.
    pub fn write(&self, w: impl io::Write, color: bool) -> io::Result<()> {
        let (text, span) = self.padded();
        let name = self.source_name.as_str();
        let parse = &self.error.source;

        let label = match parse.expected.as_slice() {
            [] => "unexpected input".to_owned(),
            [one] => format!("expected {one}"),
            many => format!("expected one of {}", many.join(", ")),
        };

        Report::build(ReportKind::Error, (name, span.clone()))
            .with_config(
                ariadne::Config::new()
                    .with_index_type(ariadne::IndexType::Byte)
                    .with_color(color),
            )
            .with_message(format!("failed to parse section `{}`", self.error.title))
            .with_label(
                Label::new((name, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((name, Source::from(text)), w)
    }

    /// Section text preceded by blank lines so report line numbers match the
    /// whole document, with the error span moved to match
    fn padded(&self) -> (String, Range<usize>) {
        let padding = "\n".repeat(self.error.start_line.saturating_sub(1));
        let span = self.error.source.span.shifted(padding.len()).into_range();
        (padding + &self.error.text, span)
    }
}

impl fmt::Display for SectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.source_name,
            self.error.absolute_line(),
            self.error.source.location.column,
            self.error
        )
    }
}

impl Error for SectionReport {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
