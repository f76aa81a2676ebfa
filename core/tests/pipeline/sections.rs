// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Which parts of a document are parsed as month sections.

use evcal_core::{Config, MonthFilter, Pipeline, RunError, run};

use crate::common::{CalendarBuilder, assert_titles};

#[test]
fn prose_outside_month_sections_is_ignored() {
    // Arrange
    let raw = CalendarBuilder::new()
        .with_text("# Community Calendar\n\nSubmit events by pull request.\n")
        .with_text("## Overview\n\n- Not an event\n### Not an event either\n")
        .with_month("January 2024", &["A"])
        .with_text("## Archive\n\nOlder events live elsewhere.\n")
        .build();

    // Act
    let events = run(&raw).unwrap();

    // Assert
    assert_titles(&events, &["A"]);
}

#[test]
fn deeper_headings_stay_inside_the_month() {
    let raw = CalendarBuilder::new()
        .with_month("January 2024", &["A", "B"])
        .build();

    // The `###` event headings must not split the month section
    let docs = Pipeline::default().documents(&raw).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].events.len(), 2);
}

#[test]
fn unanchored_pattern_selects_any_word_number_title() {
    let raw = CalendarBuilder::new()
        .with_text("## Top 10 Tips\n\n1. Arrive early\n")
        .build();

    // Selected as a month section, so its prose is a parse error
    let err = run(&raw).unwrap_err();
    assert!(matches!(err, RunError::Parse(ref e) if e.title == "Top 10 Tips"));
}

#[test]
fn configured_pattern_narrows_selection() {
    let raw = CalendarBuilder::new()
        .with_text("## Top 10 Tips\n\n1. Arrive early\n")
        .with_month("March 2024", &["Only"])
        .build();

    let config = Config {
        month_pattern: Some(r"^[A-Za-z]+\s+\d{4}$".to_owned()),
    };
    let events = Pipeline::from_config(&config).unwrap().run(&raw).unwrap();
    assert_titles(&events, &["Only"]);
}

#[test]
fn explicit_parts_are_used() {
    let raw = CalendarBuilder::new()
        .with_month("March 2024", &["Kept"])
        .build();

    let filter = MonthFilter::with_pattern("^April").unwrap();
    let pipeline = Pipeline::new(evcal_core::Grammar::new(), filter);
    assert!(pipeline.run(&raw).unwrap().is_empty());
}
