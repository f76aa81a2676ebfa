// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Split a markdown events calendar into sections and parse month sections
//! into typed documents.

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
#![allow(clippy::similar_names, clippy::single_match_else)]

pub mod ast;
mod error;
pub mod lexer;
mod parser;
pub mod section;
pub mod span;
pub mod syntax;

pub use crate::ast::{
    Agenda, DayRange, Document, EventContent, EventHeader, LinkEntry, LinkFields, LinkTable,
    Location, RawEvent, Time, Topic,
};
pub use crate::error::{ParseError, Position};
pub use crate::parser::{GRAMMAR_VERSION, Grammar};
pub use crate::section::{Section, split};
pub use crate::span::Span;
