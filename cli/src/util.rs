// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use tokio::{fs, io::AsyncReadExt};

const STDIN_NAME: &str = "<stdin>";

/// Whether the input argument names stdin: absent, or `-`
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|p| p == Path::new("-"))
}

/// Name used for the input in diagnostics
pub fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if !is_stdin(path) => p.display().to_string(),
        _ => STDIN_NAME.to_owned(),
    }
}

/// Read the whole calendar document from a file or stdin
pub async fn read_input(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(p) if !is_stdin(path) => {
            tracing::debug!(path = %p.display(), "reading calendar file");
            let raw = fs::read_to_string(p)
                .await
                .map_err(|e| format!("Failed to read {}: {}", p.display(), e))?;
            Ok(raw)
        }
        _ => {
            tracing::debug!("reading calendar from stdin");
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .map_err(|e| format!("Failed to read stdin: {e}"))?;
            Ok(raw)
        }
    }
}
