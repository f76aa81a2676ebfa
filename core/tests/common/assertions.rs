// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use evcal_core::{Date, Event};

/// Asserts the event titles, in order.
///
/// # Panics
///
/// Panics if the titles differ.
pub fn assert_titles(events: &[Event], titles: &[&str]) {
    let actual: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(actual, titles, "Event titles mismatch");
}

/// Asserts every component of a date.
///
/// # Panics
///
/// Panics if any component differs.
pub fn assert_date(date: &Date, year: i32, month: &str, day: u8) {
    assert_eq!(date.year, year, "Year mismatch");
    assert_eq!(date.month, month, "Month mismatch");
    assert_eq!(date.date, day, "Day mismatch");
}
