// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// The name of the evcal application.
pub const APP_NAME: &str = "evcal";

/// Configuration for the conversion pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regex a section title must match for the section to be parsed as a
    /// month. Defaults to [`DEFAULT_MONTH_PATTERN`](crate::DEFAULT_MONTH_PATTERN).
    pub month_pattern: Option<String>,
}
