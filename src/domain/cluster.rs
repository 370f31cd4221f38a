// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes clusters.
//!
//! Node pool names and shapes are folded into the cluster's own index entry,
//! so searching for a pool name surfaces its cluster.

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
pub struct NodePool {
    pub display_name: String,
    pub node_shape: String,
    pub node_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    pub display_name: String,
    pub ocid: String,
    pub kubernetes_version: String,
    pub state: String,
    pub vcn_ocid: String,
    pub private_endpoint: String,
    pub public_endpoint: String,
    pub node_pools: Vec<NodePool>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "ocid",
        "k8s-version",
        "state",
        "vcn-ocid",
        "private-endpoint",
        "public-endpoint",
        "node-pools",
        "node-shapes",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "node-pools", "node-shapes"],
};

impl Indexable for Cluster {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        let pool_names: Vec<&str> = self
            .node_pools
            .iter()
            .map(|p| p.display_name.as_str())
            .collect();
        let pool_shapes: Vec<&str> = self
            .node_pools
            .iter()
            .map(|p| p.node_shape.as_str())
            .collect();

        BTreeMap::from([
            ("name", self.display_name.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("k8s-version", self.kubernetes_version.to_lowercase()),
            ("state", self.state.to_lowercase()),
            ("vcn-ocid", self.vcn_ocid.to_lowercase()),
            ("private-endpoint", self.private_endpoint.to_lowercase()),
            ("public-endpoint", self.public_endpoint.to_lowercase()),
            ("node-pools", pool_names.join(" ").to_lowercase()),
            ("node-shapes", pool_shapes.join(" ").to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for Cluster {
    fn headers() -> &'static [&'static str] {
        &["NAME", "VERSION", "STATE", "NODE POOLS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.kubernetes_version.clone(),
            self.state.clone(),
            self.node_pools.len().to_string(),
        ]
    }
}

pub fn search<'a>(clusters: &'a [Cluster], pattern: &str) -> Result<Vec<&'a Cluster>, SearchError> {
    search_collection(clusters, &FIELDS, pattern)
}

pub fn list(clusters: &[Cluster], limit: usize, page: usize) -> Page<Cluster> {
    paginate_slice(clusters, limit, page)
}
