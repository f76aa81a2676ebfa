// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Shape of the projected events.

use evcal_core::{LinkType, run};
use serde_json::json;

use crate::common::assert_date;

const CALENDAR: &str = "\
# Events

## March 2024

### 5-12 RustConf Watch Party
- Topic: [Conference, Meetup] Rust, Systems
- Time: 18:30-19:00 Doors open
- Time: 21:00-22:00+ Afterparty
- Location: Taipei Hub (3F, Room A)
- Summary: A watch party for RustConf.
- Description: Bring snacks.
  Talks are streamed live.
- Website: [Official site](https://example.com)
- Ticket:
  - [Early bird](https://tix.example.com/early) NT$300
  - [Door](https://tix.example.com/door)
";

#[test]
fn ranged_event_has_start_and_end() {
    let events = run(CALENDAR).unwrap();
    assert_eq!(events.len(), 1);
    assert_date(&events[0].start, 2024, "March", 5);
    assert_date(events[0].end.as_ref().unwrap(), 2024, "March", 12);
    assert_eq!(
        events[0].start.civil(),
        Some(jiff::civil::date(2024, 3, 5))
    );
}

#[test]
fn links_are_flattened_and_typed() {
    let events = run(CALENDAR).unwrap();
    let links = &events[0].links;
    assert_eq!(links.len(), 3);
    assert_eq!(links[0].kind, LinkType::Website);
    assert_eq!(links[1].kind, LinkType::Ticket);
    assert_eq!(links[1].price.as_deref(), Some("NT$300"));
    assert_eq!(links[2].kind, LinkType::Ticket);
    assert_eq!(links[2].price, None);
}

#[test]
fn serializes_to_json() {
    let events = run(CALENDAR).unwrap();
    let value = serde_json::to_value(&events).unwrap();
    assert_eq!(
        value,
        json!([{
            "start": { "year": 2024, "month": "March", "date": 5 },
            "end": { "year": 2024, "month": "March", "date": 12 },
            "categories": ["Conference", "Meetup"],
            "topics": ["Rust", "Systems"],
            "time": [
                {
                    "from": { "hour": 18, "minute": 30 },
                    "to": { "hour": 19, "minute": 0 },
                    "after": false,
                    "agenda": "Doors open",
                },
                {
                    "from": { "hour": 21, "minute": 0 },
                    "to": { "hour": 22, "minute": 0 },
                    "after": true,
                    "agenda": "Afterparty",
                },
            ],
            "title": "RustConf Watch Party",
            "location": { "title": "Taipei Hub", "detail": "3F, Room A" },
            "summary": "A watch party for RustConf.",
            "description": "Bring snacks.\nTalks are streamed live.",
            "links": [
                {
                    "title": "Official site",
                    "url": "https://example.com",
                    "type": "website",
                    "price": null,
                },
                {
                    "title": "Early bird",
                    "url": "https://tix.example.com/early",
                    "type": "ticket",
                    "price": "NT$300",
                },
                {
                    "title": "Door",
                    "url": "https://tix.example.com/door",
                    "type": "ticket",
                    "price": null,
                },
            ],
        }])
    );
}

#[test]
fn single_day_event_serializes_null_end() {
    let raw = "\
## July 2024

### 4 Picnic
- Topic: []
- Location: Park
- Summary: s
- Description: d
";
    let value = serde_json::to_value(run(raw).unwrap()).unwrap();
    assert_eq!(value[0]["end"], serde_json::Value::Null);
    assert_eq!(value[0]["location"]["detail"], serde_json::Value::Null);
    assert_eq!(value[0]["links"], json!([]));
}
