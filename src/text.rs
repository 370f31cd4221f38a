// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! String normalization shared by the index builder and the match engine.

use unicode_normalization::UnicodeNormalization;

/// Normalize a value for indexing and matching: strip diacritics, lowercase,
/// and collapse runs of whitespace to single spaces.
///
/// Accented and plain spellings normalize to the same text, so a pattern typed
/// without diacritics still finds records that carry them:
/// - "café" → "cafe"
/// - "Zürich-DB" → "zurich-db"
///
/// Steps: NFD decomposition, drop combining marks, lowercase, collapse
/// whitespace.
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split an already-normalized blob into tokens.
///
/// Tokens are whitespace-delimited; structural punctuation ("web-01",
/// "10.0.1.5") stays inside a token so that prefix matching works on the
/// shapes operators actually type.
pub fn tokenize(blob: &str) -> impl Iterator<Item = &str> {
    blob.split_whitespace()
}

/// Combining marks have Unicode category Mn (Mark, Nonspacing).
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
