// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Object storage buckets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TableRecord;
use crate::error::SearchError;
use crate::indexable::{FieldSpec, Indexable};
use crate::paginate::{paginate_slice, Page};
use crate::search::search_collection;
use crate::tags::{flatten_tags, tag_values, DefinedTags, FreeformTags};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bucket {
    pub name: String,
    pub ocid: String,
    pub namespace: String,
    pub storage_tier: String,
    pub visibility: String,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "ocid",
        "namespace",
        "storage-tier",
        "visibility",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "ocid"],
};

impl Indexable for Bucket {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.name.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("namespace", self.namespace.to_lowercase()),
            ("storage-tier", self.storage_tier.to_lowercase()),
            ("visibility", self.visibility.to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for Bucket {
    fn headers() -> &'static [&'static str] {
        &["NAME", "NAMESPACE", "TIER", "VISIBILITY"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.namespace.clone(),
            self.storage_tier.clone(),
            self.visibility.clone(),
        ]
    }
}

pub fn search<'a>(buckets: &'a [Bucket], pattern: &str) -> Result<Vec<&'a Bucket>, SearchError> {
    search_collection(buckets, &FIELDS, pattern)
}

pub fn list(buckets: &[Bucket], limit: usize, page: usize) -> Page<Bucket> {
    paginate_slice(buckets, limit, page)
}
