// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Stable pagination over an already-ordered collection.
//!
//! Pure slicing: no cursor state, no server-side semantics. The next-page
//! token is just the decimal page number to ask for next, present exactly
//! when more items remain. Out-of-range pages are empty pages, not errors.

use serde::Serialize;

/// One page of an ordered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The items on this page, at most `limit` of them.
    pub items: Vec<T>,
    /// Size of the full collection before slicing.
    pub total_count: usize,
    /// The page size that was applied (after clamping).
    pub limit: usize,
    /// The page number that was served (after clamping).
    pub current_page: usize,
    /// Decimal page number to request next; empty when no further pages.
    pub next_page_token: String,
}

impl<T> Page<T> {
    /// True when this page carries no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice `items` into page `page` of size `limit`.
///
/// `limit` and `page` are clamped to a minimum of 1 — the documented default
/// page size belongs to the caller, not here. The boundary law: pages
/// `1..=ceil(n/limit)` partition the collection exactly, and the last page's
/// token is empty.
pub fn paginate_slice<T: Clone>(items: &[T], limit: usize, page: usize) -> Page<T> {
    let limit = limit.max(1);
    let page = page.max(1);

    let total_count = items.len();
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(total_count);

    let page_items = if start >= total_count {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    let next_page_token = if page.saturating_mul(limit) < total_count {
        (page + 1).to_string()
    } else {
        String::new()
    };

    Page {
        items: page_items,
        total_count,
        limit,
        current_page: page,
        next_page_token,
    }
}
