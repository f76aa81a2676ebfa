// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use evcal_grammar::{Agenda, Location};
use serde::{Deserialize, Serialize};

/// A calendar event, flattened from one event entry of a month section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// First day of the event
    pub start: Date,

    /// Last day of the event, when it spans several days
    pub end: Option<Date>,

    /// Categories, such as `Conference` or `Meetup`
    pub categories: Vec<String>,

    /// Topics, such as `Rust`
    pub topics: Vec<String>,

    /// Scheduled time slots
    pub time: Vec<Agenda>,

    /// Event title
    pub title: String,

    /// Venue
    pub location: Location,

    /// One-paragraph summary
    pub summary: String,

    /// Free-text description
    pub description: String,

    /// Website links, then ticket links, then RSVP links
    pub links: Vec<Link>,
}

/// Calendar date as written in the document.
///
/// The month keeps the spelling of the section heading; use
/// [`Date::month_number`] or [`Date::civil`] for a numeric view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Date {
    /// Year from the section heading
    pub year: i32,

    /// Month name from the section heading
    pub month: String,

    /// Day of month
    pub date: u8,
}

impl Date {
    /// Month number, 1-12, if the month is an English month name
    #[must_use]
    pub fn month_number(&self) -> Option<i8> {
        Month::from_str(&self.month).ok().map(Month::number)
    }

    /// The date on the proleptic Gregorian calendar, if the month is
    /// recognized and the day exists in it
    #[must_use]
    pub fn civil(&self) -> Option<jiff::civil::Date> {
        let year = i16::try_from(self.year).ok()?;
        let day = i8::try_from(self.date).ok()?;
        jiff::civil::Date::new(year, self.month_number()?, day).ok()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.date, self.year)
    }
}

/// English month names, full or abbreviated to three letters, matched
/// case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum Month {
    #[strum(to_string = "January", serialize = "Jan")]
    January = 1,
    #[strum(to_string = "February", serialize = "Feb")]
    February,
    #[strum(to_string = "March", serialize = "Mar")]
    March,
    #[strum(to_string = "April", serialize = "Apr")]
    April,
    #[strum(to_string = "May")]
    May,
    #[strum(to_string = "June", serialize = "Jun")]
    June,
    #[strum(to_string = "July", serialize = "Jul")]
    July,
    #[strum(to_string = "August", serialize = "Aug")]
    August,
    #[strum(to_string = "September", serialize = "Sep", serialize = "Sept")]
    September,
    #[strum(to_string = "October", serialize = "Oct")]
    October,
    #[strum(to_string = "November", serialize = "Nov")]
    November,
    #[strum(to_string = "December", serialize = "Dec")]
    December,
}

impl Month {
    /// Month number, 1-12
    #[must_use]
    pub const fn number(self) -> i8 {
        self as i8
    }
}

/// A typed link, copied from one entry of a link table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    /// Link text
    pub title: String,

    /// Link target
    pub url: String,

    /// Which link table the entry came from
    #[serde(rename = "type")]
    pub kind: LinkType,

    /// Free-form price
    pub price: Option<String>,
}

/// Kind of a link, after the table it is listed under
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkType {
    /// `- Website:`
    Website,
    /// `- Ticket:`
    Ticket,
    /// `- RSVP:`
    Rsvp,
}
