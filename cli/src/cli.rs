// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use evcal_core::APP_NAME;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cmd_check::CmdCheck;
use crate::cmd_convert::CmdConvert;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;
use crate::report::SectionReport;

const EVCAL_LOG_ENV: &str = "EVCAL_LOG";

/// Run the evcal command-line interface.
pub async fn run() -> ExitCode {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);
    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SectionReport>() {
                Some(report) => {
                    if report.eprint().is_err() {
                        eprintln!("{} {}", "Error:".red(), report);
                    }
                }
                None => eprintln!("{} {}", "Error:".red(), e),
            }
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// How many times `-v` was given
    pub verbose: u8,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Turn a markdown events calendar into structured event records.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $EVCAL_CONFIG, then to \
$XDG_CONFIG_HOME/evcal/config.toml on Linux and MacOS, %APPDATA%/evcal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-v --verbose ... "Log more, repeat for even more")
                    .long_help(
                        "\
Log more: -v for info, -vv for debug, -vvv for trace. Logs go to stderr; \
$EVCAL_LOG takes tracing filter directives such as `evcal_core=debug`.",
                    )
                    .global(true),
            )
            .subcommand(CmdConvert::command())
            .subcommand(CmdCheck::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    ///
    /// ## Errors
    /// If the arguments do not describe a command.
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    ///
    /// ## Errors
    /// If the arguments do not describe a command.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    ///
    /// ## Errors
    /// If no known subcommand was matched.
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Check, Convert, GenerateCompletion};
        let command = match matches.subcommand() {
            Some((CmdConvert::NAME, matches)) => Convert(CmdConvert::from(matches)),
            Some((CmdCheck::NAME, matches)) => Check(CmdCheck::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given, see --help".into()),
        };

        let config = matches.get_one("config").cloned();
        let verbose = matches.get_count("verbose");
        Ok(Cli {
            config,
            verbose,
            command,
        })
    }

    /// Run the command
    ///
    /// ## Errors
    /// If the configuration cannot be loaded or the command fails.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Convert a calendar document into JSON events
    Convert(CmdConvert),

    /// Check a calendar document without emitting events
    Check(CmdCheck),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration file
    ///
    /// ## Errors
    /// If the configuration cannot be loaded or the command fails.
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        match self {
            Commands::Convert(a) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                a.run(&config).await
            }
            Commands::Check(a) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(config).await?;
                a.run(&config).await
            }
            Commands::GenerateCompletion(a) => a.run(),
        }
    }
}

/// Install the stderr log subscriber. `$EVCAL_LOG` directives apply on top
/// of the level picked by `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(EVCAL_LOG_ENV)
        .from_env_lossy();

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
