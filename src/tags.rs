// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Tag flattening for indexing.
//!
//! Cloud resources carry two tag layers: freeform key/value tags and defined
//! tags grouped under a namespace. For search both layers are flattened into
//! two blobs: a `key:value` form so "env:prod" finds exactly-tagged records,
//! and a values-only form so plain "prod" still matches without knowing the
//! key. Empty keys, namespaces, and values are skipped rather than indexed as
//! noise.

use std::collections::BTreeMap;

/// Freeform tags: flat key → value.
pub type FreeformTags = BTreeMap<String, String>;

/// Defined tags: namespace → key → value.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, String>>;

/// Flatten both tag layers into a space-joined `key:value` blob.
///
/// Freeform tags flatten as `key:value`, defined tags as
/// `namespace.key:value`. Output order follows the maps' sorted key order, so
/// the blob is deterministic for a given record.
pub fn flatten_tags(freeform: &FreeformTags, defined: &DefinedTags) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (key, value) in freeform {
        if key.is_empty() || value.is_empty() {
            continue;
        }
        parts.push(format!("{}:{}", key.to_lowercase(), value.to_lowercase()));
    }

    for (namespace, entries) in defined {
        if namespace.is_empty() {
            continue;
        }
        for (key, value) in entries {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            parts.push(format!(
                "{}.{}:{}",
                namespace.to_lowercase(),
                key.to_lowercase(),
                value.to_lowercase()
            ));
        }
    }

    parts.join(" ")
}

/// Extract only the tag values, space-joined.
///
/// Makes tag values searchable without requiring the key prefix.
pub fn tag_values(freeform: &FreeformTags, defined: &DefinedTags) -> String {
    let mut values: Vec<String> = Vec::new();

    for value in freeform.values() {
        if value.is_empty() {
            continue;
        }
        values.push(value.to_lowercase());
    }

    for entries in defined.values() {
        for value in entries.values() {
            if value.is_empty() {
                continue;
            }
            values.push(value.to_lowercase());
        }
    }

    values.join(" ")
}
