// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text table rendering and pagination footers.
//!
//! Deliberately simple: fixed-width columns sized to content, no color, no
//! wrapping. Rendering accepts the core's output and owns nothing else.

use std::io::{self, Write};

/// Render a column-aligned table.
///
/// Column widths are sized to the widest cell (header included). Rows shorter
/// than the header list render empty cells for the missing columns.
pub fn render_table(
    out: &mut impl Write,
    headers: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let line = |out: &mut dyn Write, cells: &[&str]| -> io::Result<()> {
        let mut rendered = String::new();
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            rendered.push_str(&format!("{:<width$}  ", cell, width = width));
        }
        writeln!(out, "{}", rendered.trim_end())
    };

    line(out, headers)?;
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(
        out,
        &separators.iter().map(String::as_str).collect::<Vec<_>>(),
    )?;
    for row in rows {
        line(out, &row.iter().map(String::as_str).collect::<Vec<_>>())?;
    }
    Ok(())
}

/// Write the pagination footer shown under a listed page.
pub fn write_pagination_footer(
    out: &mut impl Write,
    current_page: usize,
    limit: usize,
    total_count: usize,
    next_page_token: &str,
) -> io::Result<()> {
    let pages = total_count.div_ceil(limit).max(1);
    write!(
        out,
        "Page {} of {} (total records: {})",
        current_page, pages, total_count
    )?;
    if next_page_token.is_empty() {
        writeln!(out)
    } else {
        writeln!(out, " — next: --page {}", next_page_token)
    }
}

/// Report an empty result set, with a page hint when the caller paged past
/// the end of a non-empty collection. Returns true when the set was empty so
/// callers can skip table rendering.
pub fn report_empty(
    out: &mut impl Write,
    item_count: usize,
    current_page: usize,
    total_count: usize,
) -> io::Result<bool> {
    if item_count > 0 {
        return Ok(false);
    }
    writeln!(out, "No items found.")?;
    if total_count > 0 {
        writeln!(
            out,
            "Page {} is empty. Total records: {}",
            current_page, total_count
        )?;
        if current_page > 1 {
            writeln!(out, "Try a lower page number (e.g., --page 1)")?;
        }
    }
    Ok(true)
}
