// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fmt::Write, path::PathBuf, str::FromStr};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use evcal_core::{Document, Month, Pipeline, RunError};

use crate::config::Config;
use crate::report::SectionReport;
use crate::util::{read_input, source_name};

/// Validate a calendar document without emitting events
#[derive(Debug, Clone)]
pub struct CmdCheck {
    /// Calendar document, stdin when absent or `-`
    pub input: Option<PathBuf>,
}

impl CmdCheck {
    /// Subcommand name
    pub const NAME: &str = "check";

    /// Create the subcommand
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check that every month section of a calendar document parses")
            .arg(
                arg!([INPUT] "Calendar document to read, `-` or nothing for stdin")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Create the subcommand from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: matches.get_one("INPUT").cloned(),
        }
    }

    /// Parse the document and print a summary of its month sections
    ///
    /// ## Errors
    /// If the input cannot be read or a month section does not parse.
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking calendar...");
        let raw = read_input(self.input.as_deref()).await?;
        let pipeline = Pipeline::from_config(&config.core)?;
        let documents = match pipeline.documents(&raw) {
            Ok(documents) => documents,
            Err(RunError::Parse(e)) => {
                return Err(Box::new(SectionReport::new(
                    source_name(self.input.as_deref()),
                    e,
                )));
            }
            Err(e) => return Err(e.into()),
        };

        print!("{}", summarize(&documents));
        let events: usize = documents.iter().map(|doc| doc.events.len()).sum();
        println!(
            "{} {} month sections, {} events",
            "OK".green(),
            documents.len(),
            events
        );
        Ok(())
    }
}

/// One line per month section: heading and event count, flagging month names
/// that dates cannot be computed for
fn summarize(documents: &[Document]) -> String {
    let mut out = String::new();
    for doc in documents {
        let n = doc.events.len();
        let _ = match Month::from_str(&doc.month) {
            Ok(_) => writeln!(out, "{} {}: {n} events", doc.month, doc.year),
            Err(_) => writeln!(
                out,
                "{} {}: {n} events {}",
                doc.month,
                doc.year,
                "(unrecognized month name)".yellow()
            ),
        };
    }
    out
}
