// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event order across and within month sections.

use evcal_core::{Pipeline, run};

use crate::common::{CalendarBuilder, assert_date, assert_titles};

#[test]
fn events_follow_section_then_source_order() {
    // Arrange
    let raw = CalendarBuilder::new()
        .with_month("January 2024", &["A", "B"])
        .with_month("February 2024", &["C", "D", "E"])
        .build();

    // Act
    let events = run(&raw).unwrap();

    // Assert
    assert_eq!(events.len(), 5);
    assert_titles(&events, &["A", "B", "C", "D", "E"]);
    assert_date(&events[1].start, 2024, "January", 2);
    assert_date(&events[2].start, 2024, "February", 1);
}

#[test]
fn sections_are_not_reordered_by_date() {
    let raw = CalendarBuilder::new()
        .with_month("December 2024", &["Late"])
        .with_month("January 2024", &["Early"])
        .build();

    let events = run(&raw).unwrap();
    assert_titles(&events, &["Late", "Early"]);
}

#[test]
fn empty_month_sections_contribute_nothing() {
    let raw = CalendarBuilder::new()
        .with_month("January 2024", &[])
        .with_month("February 2024", &["Only"])
        .with_month("March 2024", &[])
        .build();

    let events = run(&raw).unwrap();
    assert_titles(&events, &["Only"]);
}

#[test]
fn runs_are_repeatable() {
    let raw = CalendarBuilder::new()
        .with_month("May 2025", &["One", "Two"])
        .build();

    let pipeline = Pipeline::default();
    assert_eq!(pipeline.run(&raw).unwrap(), pipeline.run(&raw).unwrap());
}

#[test]
fn documents_stop_before_projection() {
    let raw = CalendarBuilder::new()
        .with_month("January 2024", &["A", "B"])
        .with_month("February 2024", &["C"])
        .build();

    let docs = Pipeline::default().documents(&raw).unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].month, "January");
    assert_eq!(docs[0].events.len(), 2);
    assert_eq!(docs[1].events.len(), 1);
}
