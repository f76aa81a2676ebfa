// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for converting markdown events calendars.

mod cli;
mod cmd_check;
mod cmd_convert;
mod cmd_generate_completion;
mod config;
mod report;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_check::CmdCheck;
pub use crate::cmd_convert::CmdConvert;
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::config::{Config, OutputConfig, parse_config};
pub use crate::report::SectionReport;
