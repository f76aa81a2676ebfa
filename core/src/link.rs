// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use evcal_grammar::LinkTable;

use crate::event::{Link, LinkType};

/// Flatten a link table into typed links, keeping entry order. An absent
/// table yields no links.
#[must_use]
pub fn normalize_links(table: Option<LinkTable>, kind: LinkType) -> Vec<Link> {
    table
        .unwrap_or_default()
        .into_iter()
        .map(|entry| Link {
            title: entry.link.title,
            url: entry.link.url,
            kind,
            price: entry.link.price,
        })
        .collect()
}
