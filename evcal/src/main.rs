// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! evcal - turn a markdown events calendar into structured event records

use std::process::ExitCode;

use evcal_cli::run;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}
