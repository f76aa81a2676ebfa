// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A malformed month section aborts the whole run.

use evcal_core::{RunError, run};

use crate::common::{CalendarBuilder, event_entry, month_section};

fn broken_calendar() -> String {
    let broken = month_section("February 2024", &[event_entry("x", "Broken")]);
    CalendarBuilder::new()
        .with_month("January 2024", &["A"])
        .with_text(&broken)
        .with_month("March 2024", &["C"])
        .build()
}

#[test]
fn second_section_error_stops_the_run() {
    // Arrange
    let raw = broken_calendar();

    // Act
    let err = run(&raw).unwrap_err();

    // Assert
    let RunError::Parse(err) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(err.title, "February 2024");
    assert!(err.text.starts_with("## February 2024\n"));
    assert_eq!(err.source.location.line, 3);
    assert_eq!(err.source.found.as_deref(), Some("x"));
}

#[test]
fn error_lines_map_back_to_the_document() {
    let raw = broken_calendar();
    let RunError::Parse(err) = run(&raw).unwrap_err() else {
        panic!("expected a parse error");
    };

    let line = raw
        .lines()
        .position(|l| l == "### x Broken")
        .map(|i| i + 1)
        .unwrap();
    assert_eq!(err.absolute_line(), line);
    assert_eq!(
        raw.lines().nth(err.start_line - 1),
        Some("## February 2024")
    );
}

#[test]
fn first_failing_section_wins() {
    let raw = [
        month_section("January 2024", &[event_entry("0", "Zero")]),
        month_section("February 2024", &[event_entry("x", "Broken")]),
    ]
    .join("\n");

    let RunError::Parse(err) = run(&raw).unwrap_err() else {
        panic!("expected a parse error");
    };
    assert_eq!(err.title, "January 2024");
}

#[test]
fn error_message_names_the_section() {
    let RunError::Parse(err) = run(&broken_calendar()).unwrap_err() else {
        panic!("expected a parse error");
    };
    let message = err.to_string();
    assert!(message.contains("February 2024"), "{message}");
    assert!(message.contains("line 3, column 5"), "{message}");
}
