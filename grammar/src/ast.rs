// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse tree produced by the event grammar for one month section.

use serde::Serialize;

/// Parsed month section: the heading's month and year plus its events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Year from the section heading
    pub year: i32,

    /// Month name as written in the section heading
    pub month: String,

    /// Events in source order, possibly empty
    pub events: Vec<RawEvent>,
}

/// An event as produced directly by the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawEvent {
    /// Event header line
    pub header: EventHeader,

    /// Labeled fields following the header
    pub content: EventContent,
}

/// `### <day-range> <title>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventHeader {
    /// Day or closed day range within the section's month
    pub day: DayRange,

    /// Event title
    pub title: String,
}

/// Day of month, or a closed range of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRange {
    /// First day, 1-31
    pub from: u8,

    /// Last day, 1-31 and not before `from`
    pub to: Option<u8>,
}

/// Event body, in the fixed field order of the grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventContent {
    /// Categories and topics
    pub topic: Topic,

    /// Scheduled time slots
    pub time: Vec<Agenda>,

    /// Venue
    pub location: Location,

    /// One-paragraph summary
    pub summary: String,

    /// Free-text description
    pub description: String,

    /// Website links
    pub website: Option<LinkTable>,

    /// Ticket links
    pub ticket: Option<LinkTable>,

    /// RSVP links
    pub rsvp: Option<LinkTable>,
}

/// `- Topic: [categories] topics`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Topic {
    /// Bracketed categories, deduplicated, in first-seen order
    pub categories: Vec<String>,

    /// Topics after the brackets, deduplicated, in first-seen order
    pub topics: Vec<String>,
}

/// One scheduled time slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agenda {
    /// Start of the slot
    pub from: Time,

    /// End of the slot
    pub to: Time,

    /// The slot begins once the previous one wraps up rather than on the clock
    pub after: bool,

    /// What happens in the slot
    pub agenda: String,
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Time {
    /// Hour, 0-23
    pub hour: u8,

    /// Minute, 0-59
    pub minute: u8,
}

/// `- Location: title (detail)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Venue name
    pub title: String,

    /// Room, floor, address or similar
    pub detail: Option<String>,
}

/// Entries of one link category
pub type LinkTable = Vec<LinkEntry>;

/// A link entry as written in a link table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Link fields
    pub link: LinkFields,
}

/// `[title](url) price`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkFields {
    /// Link text
    pub title: String,

    /// Link target
    pub url: String,

    /// Free-form price, absent when nothing follows the link
    pub price: Option<String>,
}
