// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! The `Indexable` capability and per-domain field declarations.
//!
//! Every resource domain makes its records searchable the same way: implement
//! [`Indexable`] to project the typed record into a flat map of named text
//! fields, and declare a [`FieldSpec`] naming which of those fields are
//! searchable and which are boosted for ranking. The index builder and match
//! engine stay entirely domain-agnostic; they only ever see the declared
//! field names.

use std::collections::BTreeMap;

use crate::error::SearchError;

/// A record that can expose itself as a flat set of named text fields.
///
/// Implementations are pure projections: no side effects, no errors. A record
/// with missing optional data yields empty strings for those fields. Values
/// should be lower-cased and multi-value attributes joined with single spaces;
/// the index builder re-normalizes on top, so a sloppy adapter degrades
/// nothing but clarity.
///
/// Field names returned here must be a subset of the domain's declared
/// searchable fields. Fields declared but absent from the map are indexed as
/// empty text.
pub trait Indexable {
    /// Project this record into `field name → normalized text`.
    fn to_indexable(&self) -> BTreeMap<&'static str, String>;
}

/// Per-domain field declaration: the searchable set and the boosted subset.
///
/// Boosted fields (typically name / identifier / tag fields) count more
/// heavily in ranking. `boosted` must be a subset of `searchable`; the match
/// engine rejects a declaration that violates this.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// All fields eligible for matching, in declaration order.
    pub searchable: &'static [&'static str],
    /// Fields whose matches rank above non-boosted matches.
    pub boosted: &'static [&'static str],
}

impl FieldSpec {
    /// Check the declaration invariants: at least one searchable field, and
    /// every boosted field present in the searchable set.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.searchable.is_empty() {
            return Err(SearchError::EmptyFieldSpec);
        }
        for field in self.boosted {
            if !self.searchable.contains(field) {
                return Err(SearchError::UnknownBoostedField((*field).to_string()));
            }
        }
        Ok(())
    }

    pub fn is_boosted(&self, field: &str) -> bool {
        self.boosted.contains(&field)
    }
}
