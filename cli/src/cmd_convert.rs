// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use evcal_core::{Event, Pipeline, RunError};
use tokio::fs;

use crate::config::Config;
use crate::report::SectionReport;
use crate::util::{read_input, source_name};

/// Convert a calendar document into a JSON array of events
#[derive(Debug, Clone)]
pub struct CmdConvert {
    /// Calendar document, stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// File to write the events to, stdout when absent
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    pub pretty: bool,
}

impl CmdConvert {
    /// Subcommand name
    pub const NAME: &str = "convert";

    /// Create the subcommand
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a calendar document into JSON events")
            .arg(
                arg!([INPUT] "Calendar document to read, `-` or nothing for stdin")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output <FILE> "Write the events to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--pretty "Pretty-print the JSON output"))
    }

    /// Create the subcommand from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: matches.get_one("INPUT").cloned(),
            output: matches.get_one("output").cloned(),
            pretty: matches.get_flag("pretty"),
        }
    }

    /// Run the conversion
    ///
    /// ## Errors
    /// If the input cannot be read, a month section does not parse, or the
    /// output cannot be written. Parse failures come back as a
    /// [`SectionReport`].
    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting calendar...");
        let raw = read_input(self.input.as_deref()).await?;
        let pipeline = Pipeline::from_config(&config.core)?;
        let events = match pipeline.run(&raw) {
            Ok(events) => events,
            Err(RunError::Parse(e)) => {
                return Err(Box::new(SectionReport::new(
                    source_name(self.input.as_deref()),
                    e,
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let json = render(&events, self.pretty || config.output.pretty)?;
        match &self.output {
            Some(path) => {
                fs::write(path, json + "\n")
                    .await
                    .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                tracing::info!(path = %path.display(), events = events.len(), "events written");
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

fn render(events: &[Event], pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(events)
    } else {
        serde_json::to_string(events)
    }
}
