// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Ephemeral search index construction.
//!
//! The index is built fresh for every search call over the full in-memory
//! collection, consumed by the match engine, and dropped. It is never
//! persisted, never shared across calls, and never mutated after build.
//!
//! Invariants established here and relied on by the match engine:
//!
//! 1. Record entries preserve the original collection order, so an index
//!    position *is* the position in the caller's collection — no secondary
//!    lookup table is needed to translate match results back to records.
//! 2. Every entry carries one normalized text blob per declared field, in
//!    declaration order. Fields a record does not provide are empty strings.
//! 3. Token lists are derived from the blobs by whitespace splitting and
//!    stay parallel to them.

use tracing::debug;

use crate::error::SearchError;
use crate::indexable::Indexable;
use crate::text::{normalize, tokenize};

/// One record's indexed text: per-field blobs and their token lists, both
/// parallel to the index's field declaration.
#[derive(Debug)]
pub(crate) struct RecordEntry {
    pub(crate) blobs: Vec<String>,
    pub(crate) tokens: Vec<Vec<String>>,
}

/// An ephemeral, immutable index over one collection of records.
#[derive(Debug)]
pub struct SearchIndex {
    fields: Vec<String>,
    entries: Vec<RecordEntry>,
}

impl SearchIndex {
    /// Build an index over `records` for the declared `fields`.
    ///
    /// Fails only on an empty field declaration — a caller programming
    /// error, not a runtime condition to recover from. An empty record
    /// collection builds an empty index; searching it yields no matches.
    pub fn build<T: Indexable>(records: &[T], fields: &[&str]) -> Result<Self, SearchError> {
        if fields.is_empty() {
            return Err(SearchError::EmptyFieldSpec);
        }

        let entries: Vec<RecordEntry> = records
            .iter()
            .map(|record| {
                let projected = record.to_indexable();
                let blobs: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        projected
                            .get(*field)
                            .map(|value| normalize(value))
                            .unwrap_or_default()
                    })
                    .collect();
                let tokens = blobs
                    .iter()
                    .map(|blob| tokenize(blob).map(str::to_string).collect())
                    .collect();
                RecordEntry { blobs, tokens }
            })
            .collect();

        debug!(
            records = entries.len(),
            fields = fields.len(),
            "built ephemeral search index"
        );

        Ok(Self {
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            entries,
        })
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared field names, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Position of a field name within the declaration, if declared.
    pub(crate) fn field_position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    pub(crate) fn entry(&self, position: usize) -> &RecordEntry {
        &self.entries[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct Named(&'static str);

    impl Indexable for Named {
        fn to_indexable(&self) -> BTreeMap<&'static str, String> {
            BTreeMap::from([("name", self.0.to_string())])
        }
    }

    #[test]
    fn empty_field_declaration_is_an_error() {
        let records = [Named("web-01")];
        let err = SearchIndex::build(&records, &[]).unwrap_err();
        assert_eq!(err, SearchError::EmptyFieldSpec);
    }

    #[test]
    fn preserves_collection_order() {
        let records = [Named("web-01"), Named("web-02"), Named("db-01")];
        let index = SearchIndex::build(&records, &["name"]).unwrap();
        assert_eq!(index.len(), 3);
        assert_eq!(index.entry(0).blobs[0], "web-01");
        assert_eq!(index.entry(2).blobs[0], "db-01");
    }

    #[test]
    fn undeclared_fields_read_as_empty() {
        let records = [Named("web-01")];
        let index = SearchIndex::build(&records, &["name", "ocid"]).unwrap();
        assert_eq!(index.entry(0).blobs[1], "");
        assert!(index.entry(0).tokens[1].is_empty());
    }

    #[test]
    fn blobs_are_normalized_on_build() {
        struct Sloppy;
        impl Indexable for Sloppy {
            fn to_indexable(&self) -> BTreeMap<&'static str, String> {
                BTreeMap::from([("name", "  Web  Café\t01 ".to_string())])
            }
        }
        let index = SearchIndex::build(&[Sloppy], &["name"]).unwrap();
        assert_eq!(index.entry(0).blobs[0], "web cafe 01");
        assert_eq!(index.entry(0).tokens[0], vec!["web", "cafe", "01"]);
    }

    #[test]
    fn empty_collection_builds_empty_index() {
        let records: [Named; 0] = [];
        let index = SearchIndex::build(&records, &["name"]).unwrap();
        assert!(index.is_empty());
    }
}
