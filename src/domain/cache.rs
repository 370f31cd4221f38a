// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Cache clusters.

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
pub struct CacheCluster {
    pub display_name: String,
    pub ocid: String,
    pub state: String,
    pub shape: String,
    pub node_count: u32,
    pub endpoints: Vec<String>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "ocid",
        "state",
        "shape",
        "node-count",
        "endpoints",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "ocid"],
};

impl Indexable for CacheCluster {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.display_name.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("state", self.state.to_lowercase()),
            ("shape", self.shape.to_lowercase()),
            ("node-count", self.node_count.to_string()),
            ("endpoints", self.endpoints.join(" ").to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for CacheCluster {
    fn headers() -> &'static [&'static str] {
        &["NAME", "SHAPE", "NODES", "STATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.shape.clone(),
            self.node_count.to_string(),
            self.state.clone(),
        ]
    }
}

pub fn search<'a>(
    caches: &'a [CacheCluster],
    pattern: &str,
) -> Result<Vec<&'a CacheCluster>, SearchError> {
    search_collection(caches, &FIELDS, pattern)
}

pub fn list(caches: &[CacheCluster], limit: usize, page: usize) -> Page<CacheCluster> {
    paginate_slice(caches, limit, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CacheCluster {
        CacheCluster {
            display_name: "session-cache".to_string(),
            ocid: "ocid1.rediscluster.oc1..fff".to_string(),
            state: "ACTIVE".to_string(),
            shape: "MySQL.HeatWave.VM.Standard".to_string(),
            node_count: 2,
            endpoints: vec!["10.0.3.4:6379".to_string()],
            freeform_tags: FreeformTags::new(),
            defined_tags: DefinedTags::new(),
        }
    }

    #[test]
    fn projection_stays_within_declared_fields() {
        FIELDS.validate().unwrap();
        for key in sample().to_indexable().keys() {
            assert!(FIELDS.searchable.contains(key), "undeclared field {key}");
        }
    }

    #[test]
    fn searchable_by_endpoint_fragment() {
        let caches = [sample()];
        let found = search(&caches, "10.0.3").unwrap();
        assert_eq!(found.len(), 1);
    }
}
