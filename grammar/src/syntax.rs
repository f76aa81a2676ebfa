// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Grammar for one month section of the events calendar.
//!
//! ```txt
//! document      = month-header { line-break event } trailing-ws EOF
//! line-break    = newline { inline-ws newline }
//! month-header  = inline-ws "##" 1*inline-ws month inline-ws year inline-ws
//! event         = event-header
//!                 line-break topic
//!                 { line-break time }
//!                 line-break location
//!                 line-break summary
//!                 line-break description
//!                 [ line-break link-table("Website") ]
//!                 [ line-break link-table("Ticket") ]
//!                 [ line-break link-table("RSVP") ]
//! event-header  = "###" 1*inline-ws day-range 1*inline-ws title
//! day-range     = day [ range-sep day ]
//! range-sep     = inline-ws ( "-" / "–" / "~" ) inline-ws
//! field(L)      = "-" 1*inline-ws L ":"
//! topic         = field("Topic") inline-ws "[" [ names ] inline-ws "]" inline-ws [ names ]
//! time          = field("Time") inline-ws clock range-sep clock [ "+" ] [ 1*inline-ws text ]
//! location      = field("Location") inline-ws location-title [ "(" detail ")" ] inline-ws
//! summary       = field("Summary") paragraph
//! description   = field("Description") paragraph
//! paragraph     = inline-ws text { newline indent text }
//! link-table(L) = field(L) ( 1*inline-ws link / inline-ws 1*link-item )
//! link-item     = newline indent "-" 1*inline-ws link
//! link          = "[" title "]" "(" url ")" [ 1*inline-ws price ]
//! ```

use std::borrow::Cow;

use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use chumsky::text::TextExpected;

use crate::ast::{
    Agenda, DayRange, Document, EventContent, EventHeader, LinkEntry, LinkFields, LinkTable,
    Location, RawEvent, Time, Topic,
};

/// Parse one month section into a [`Document`]
///
/// ## Errors
/// If the text does not conform to the grammar, the errors are returned. No
/// recovery is attempted, so there is exactly one.
pub fn syntax_analysis(src: &str) -> Result<Document, Vec<Rich<'_, char>>> {
    document::<extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
}

/// Constructs the grammar reports as expected when a value is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarExpected {
    /// `## <Month> <Year>`
    MonthHeader,
    /// Alphabetic month name
    MonthName,
    /// Base-10 year
    Year,
    /// `### <day-range> <title>`
    EventHeader,
    /// Day of month, 1-31
    Day,
    /// Range end not before its start
    DayRangeOrder,
    /// Non-empty title
    Title,
    /// A labeled `- Label:` field
    Field(&'static str),
    /// Non-empty category or topic name
    Name,
    /// Hour, 0-23
    Hour,
    /// Two-digit minute, 0-59
    Minute,
    /// Non-empty venue name
    LocationTitle,
    /// Link target
    Url,
}

impl From<GrammarExpected> for RichPattern<'_, char> {
    fn from(expected: GrammarExpected) -> Self {
        match expected {
            GrammarExpected::MonthHeader => {
                Self::Label(Cow::Borrowed("month heading `## <Month> <Year>`"))
            }
            GrammarExpected::MonthName => Self::Label(Cow::Borrowed("month name")),
            GrammarExpected::Year => Self::Label(Cow::Borrowed("year")),
            GrammarExpected::EventHeader => {
                Self::Label(Cow::Borrowed("event heading `### <day> <title>`"))
            }
            GrammarExpected::Day => Self::Label(Cow::Borrowed("day of month (1-31)")),
            GrammarExpected::DayRangeOrder => {
                Self::Label(Cow::Borrowed("day range ending on or after its first day"))
            }
            GrammarExpected::Title => Self::Label(Cow::Borrowed("event title")),
            GrammarExpected::Field(label) => {
                Self::Label(Cow::Owned(format!("field `- {label}:`")))
            }
            GrammarExpected::Name => Self::Label(Cow::Borrowed("name")),
            GrammarExpected::Hour => Self::Label(Cow::Borrowed("hour (0-23)")),
            GrammarExpected::Minute => Self::Label(Cow::Borrowed("two-digit minute (00-59)")),
            GrammarExpected::LocationTitle => Self::Label(Cow::Borrowed("location")),
            GrammarExpected::Url => Self::Label(Cow::Borrowed("link url")),
        }
    }
}

/// Parser for a whole month section
pub fn document<'src, E>() -> impl Parser<'src, &'src str, Document, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    month_header()
        .then(line_break().ignore_then(event()).repeated().collect::<Vec<_>>())
        .then_ignore(text::whitespace())
        .then_ignore(end())
        .map(|((month, year), events)| Document {
            year,
            month,
            events,
        })
}

fn month_header<'src, E>() -> impl Parser<'src, &'src str, (String, i32), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let month = any()
        .filter(|c: &char| c.is_alphabetic())
        .repeated()
        .at_least(1)
        .to_slice()
        .labelled(GrammarExpected::MonthName);

    let year = text::digits(10)
        .to_slice()
        .try_map(|s: &str, span| {
            lexical::parse::<i32, _>(s)
                .map_err(|_| E::Error::expected_found([GrammarExpected::Year], None, span))
        })
        .labelled(GrammarExpected::Year);

    text::inline_whitespace()
        .ignore_then(just("##").labelled(GrammarExpected::MonthHeader))
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(month)
        .then_ignore(text::inline_whitespace())
        .then(year)
        .then_ignore(text::inline_whitespace())
        .map(|(month, year): (&str, i32)| (month.to_owned(), year))
}

fn event<'src, E>() -> impl Parser<'src, &'src str, RawEvent, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    event_header()
        .then_ignore(line_break())
        .then(event_content())
        .map(|(header, content)| RawEvent { header, content })
}

fn event_content<'src, E>() -> impl Parser<'src, &'src str, EventContent, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let links = line_break()
        .ignore_then(link_table("Website"))
        .or_not()
        .then(line_break().ignore_then(link_table("Ticket")).or_not())
        .then(line_break().ignore_then(link_table("RSVP")).or_not());

    topic()
        .then(line_break().ignore_then(agenda()).repeated().collect::<Vec<_>>())
        .then_ignore(line_break())
        .then(location())
        .then_ignore(line_break())
        .then(field("Summary").ignore_then(paragraph()))
        .then_ignore(line_break())
        .then(field("Description").ignore_then(paragraph()))
        .then(links)
        .map(|(((((topic, time), location), summary), description), ((website, ticket), rsvp))| {
            EventContent {
                topic,
                time,
                location,
                summary,
                description,
                website,
                ticket,
                rsvp,
            }
        })
}

fn event_header<'src, E>() -> impl Parser<'src, &'src str, EventHeader, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let title = rest_of_line().try_map(|s: &str, span| {
        if s.is_empty() {
            Err(E::Error::expected_found([GrammarExpected::Title], None, span))
        } else {
            Ok(s.to_owned())
        }
    });

    just("###")
        .labelled(GrammarExpected::EventHeader)
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(day_range())
        .then_ignore(text::inline_whitespace().at_least(1))
        .then(title)
        .map(|(day, title)| EventHeader { day, title })
}

fn day_range<'src, E>() -> impl Parser<'src, &'src str, DayRange, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    day()
        .then(range_sep().ignore_then(day()).or_not())
        .try_map(|(from, to), span| match to {
            Some(to) if to < from => Err(E::Error::expected_found(
                [GrammarExpected::DayRangeOrder],
                None,
                span,
            )),
            to => Ok(DayRange { from, to }),
        })
}

fn day<'src, E>() -> impl Parser<'src, &'src str, u8, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    text::digits(10)
        .to_slice()
        .try_map(|s: &str, span| match lexical::parse::<u8, _>(s) {
            Ok(day) if (1..=31).contains(&day) => Ok(day),
            _ => Err(E::Error::expected_found([GrammarExpected::Day], None, span)),
        })
        .labelled(GrammarExpected::Day)
}

fn range_sep<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    one_of("-–~").padded_by(text::inline_whitespace()).ignored()
}

/// `- Label:`, matched on the whole label so a misspelled or misplaced field
/// reports which fields were acceptable there
fn field<'src, E>(label: &'static str) -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let name = any()
        .filter(|c: &char| c.is_ascii_alphabetic())
        .repeated()
        .at_least(1)
        .to_slice()
        .try_map(move |name: &str, span| {
            if name == label {
                Ok(())
            } else {
                Err(E::Error::expected_found(
                    [GrammarExpected::Field(label)],
                    None,
                    span,
                ))
            }
        });

    just('-')
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(name)
        .then_ignore(just(':'))
}

fn topic<'src, E>() -> impl Parser<'src, &'src str, Topic, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let categories = just('[')
        .ignore_then(names())
        .then_ignore(text::inline_whitespace())
        .then_ignore(just(']'));

    field("Topic")
        .ignore_then(text::inline_whitespace())
        .ignore_then(categories)
        .then_ignore(text::inline_whitespace())
        .then(names())
        .map(|(categories, topics)| Topic { categories, topics })
}

fn names<'src, E>() -> impl Parser<'src, &'src str, Vec<String>, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let name = none_of(",[]\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(str::trim)
        .filter(|s: &&str| !s.is_empty())
        .map(str::to_owned)
        .labelled(GrammarExpected::Name);

    name.separated_by(just(','))
        .collect::<Vec<_>>()
        .map(dedup)
}

fn agenda<'src, E>() -> impl Parser<'src, &'src str, Agenda, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let after = just('+').or_not().map(|plus| plus.is_some());
    let label = text::inline_whitespace()
        .at_least(1)
        .ignore_then(rest_of_line())
        .or_not();

    field("Time")
        .ignore_then(text::inline_whitespace())
        .ignore_then(clock())
        .then_ignore(range_sep())
        .then(clock())
        .then(after)
        .then(label)
        .map(|(((from, to), after), agenda)| Agenda {
            from,
            to,
            after,
            agenda: agenda.unwrap_or_default().to_owned(),
        })
}

fn clock<'src, E>() -> impl Parser<'src, &'src str, Time, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let hour = text::digits(10)
        .at_most(2)
        .to_slice()
        .try_map(|s: &str, span| match lexical::parse::<u8, _>(s) {
            Ok(hour) if hour < 24 => Ok(hour),
            _ => Err(E::Error::expected_found([GrammarExpected::Hour], None, span)),
        })
        .labelled(GrammarExpected::Hour);

    let minute = text::digits(10)
        .exactly(2)
        .to_slice()
        .try_map(|s: &str, span| match lexical::parse::<u8, _>(s) {
            Ok(minute) if minute < 60 => Ok(minute),
            _ => Err(E::Error::expected_found([GrammarExpected::Minute], None, span)),
        })
        .labelled(GrammarExpected::Minute);

    hour.then_ignore(just(':'))
        .then(minute)
        .map(|(hour, minute)| Time { hour, minute })
}

fn location<'src, E>() -> impl Parser<'src, &'src str, Location, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let title = none_of("(\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .map(str::trim)
        .try_map(|s: &str, span| {
            if s.is_empty() {
                Err(E::Error::expected_found(
                    [GrammarExpected::LocationTitle],
                    None,
                    span,
                ))
            } else {
                Ok(s.to_owned())
            }
        })
        .labelled(GrammarExpected::LocationTitle);

    let detail = just('(')
        .ignore_then(none_of(")\r\n").repeated().to_slice())
        .then_ignore(just(')'))
        .map(|s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_owned));

    field("Location")
        .ignore_then(text::inline_whitespace())
        .ignore_then(title)
        .then(detail.or_not().map(Option::flatten))
        .then_ignore(text::inline_whitespace())
        .map(|(title, detail)| Location { title, detail })
}

/// First line after the label, then indented continuation lines joined with `\n`
fn paragraph<'src, E>() -> impl Parser<'src, &'src str, String, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let continuation = text::newline()
        .ignore_then(indent())
        .ignore_then(rest_of_line())
        .filter(|s: &&str| !s.is_empty());

    text::inline_whitespace()
        .ignore_then(rest_of_line())
        .then(continuation.repeated().collect::<Vec<_>>())
        .map(|(first, rest)| {
            std::iter::once(first)
                .chain(rest)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
}

fn link_table<'src, E>(label: &'static str) -> impl Parser<'src, &'src str, LinkTable, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let inline = text::inline_whitespace()
        .at_least(1)
        .ignore_then(link())
        .map(|entry| vec![entry]);

    let entry = text::newline()
        .ignore_then(indent())
        .ignore_then(just('-'))
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(link());

    let nested = text::inline_whitespace()
        .ignore_then(entry.repeated().at_least(1).collect::<Vec<_>>());

    field(label).ignore_then(choice((inline, nested)))
}

fn link<'src, E>() -> impl Parser<'src, &'src str, LinkEntry, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, GrammarExpected>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    let title = none_of("]\r\n").repeated().to_slice().map(str::trim);

    let url = none_of(") \t\r\n")
        .repeated()
        .at_least(1)
        .to_slice()
        .labelled(GrammarExpected::Url);

    let price = text::inline_whitespace()
        .at_least(1)
        .ignore_then(rest_of_line())
        .or_not()
        .map(|price: Option<&str>| price.filter(|p| !p.is_empty()).map(str::to_owned));

    just('[')
        .ignore_then(title)
        .then_ignore(just(']'))
        .then_ignore(just('('))
        .then(url)
        .then_ignore(just(')'))
        .then(price)
        .map(|((title, url), price): ((&str, &str), _)| LinkEntry {
            link: LinkFields {
                title: title.to_owned(),
                url: url.to_owned(),
                price,
            },
        })
}

fn line_break<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    text::newline()
        .then(text::inline_whitespace().then(text::newline()).repeated())
        .ignored()
}

fn indent<'src, E>() -> impl Parser<'src, &'src str, (), E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    choice((
        just('\t').ignored(),
        just(' ').repeated().at_least(2).ignored(),
    ))
}

/// Remainder of the current line, trimmed
fn rest_of_line<'src, E>() -> impl Parser<'src, &'src str, &'src str, E> + Clone
where
    E: ParserExtra<'src, &'src str>,
    E::Error: LabelError<'src, &'src str, TextExpected<()>>,
{
    none_of("\r\n").repeated().to_slice().map(str::trim)
}

/// Drop repeated names, keeping the first occurrence
fn dedup(names: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}
