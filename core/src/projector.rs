// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evcal_grammar::{Document, RawEvent};

use crate::event::{Date, Event, LinkType};
use crate::link::normalize_links;

/// Flatten a parsed month section into events, one per entry, in order
#[must_use]
pub fn project(doc: Document) -> Vec<Event> {
    let Document {
        year,
        month,
        events,
    } = doc;

    events
        .into_iter()
        .map(|raw| project_event(year, &month, raw))
        .collect()
}

fn project_event(year: i32, month: &str, raw: RawEvent) -> Event {
    let RawEvent { header, content } = raw;
    let date = |date| Date {
        year,
        month: month.to_owned(),
        date,
    };

    let mut links = normalize_links(content.website, LinkType::Website);
    links.extend(normalize_links(content.ticket, LinkType::Ticket));
    links.extend(normalize_links(content.rsvp, LinkType::Rsvp));

    let start = date(header.day.from);
    if start.civil().is_none() {
        tracing::warn!(date = %start, title = %header.title, "event date is not a calendar date");
    }

    Event {
        start,
        end: header.day.to.map(date),
        categories: content.topic.categories,
        topics: content.topic.topics,
        time: content.time,
        title: header.title,
        location: content.location,
        summary: content.summary,
        description: content.description,
        links,
    }
}
