// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Turn a markdown events calendar into structured event records.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod event;
mod filter;
mod link;
mod pipeline;
mod projector;

pub use evcal_grammar::{
    Agenda, Document, GRAMMAR_VERSION, Grammar, Location, ParseError, Position, Section, Span,
    Time,
};

pub use crate::config::{APP_NAME, Config};
pub use crate::error::{RunError, SectionError};
pub use crate::event::{Date, Event, Link, LinkType, Month};
pub use crate::filter::{DEFAULT_MONTH_PATTERN, MonthFilter};
pub use crate::link::normalize_links;
pub use crate::pipeline::{Pipeline, run};
pub use crate::projector::project;
