// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Virtual cloud networks.
//!
//! Related-resource display names (gateways, subnets, NSGs, route tables,
//! security lists) are indexed with the VCN so the network a thing lives in
//! is findable by that thing's name.

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
pub struct Vcn {
    pub display_name: String,
    pub ocid: String,
    pub state: String,
    pub cidr_blocks: Vec<String>,
    pub dns_label: String,
    pub domain_name: String,
    pub gateway_names: Vec<String>,
    pub subnet_names: Vec<String>,
    pub nsg_names: Vec<String>,
    pub route_table_names: Vec<String>,
    pub security_list_names: Vec<String>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "ocid",
        "state",
        "cidrs",
        "dns-label",
        "domain-name",
        "gateways",
        "subnets",
        "nsgs",
        "route-tables",
        "security-lists",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "ocid", "dns-label", "domain-name", "tags-kv", "tags-val"],
};

fn join_names(names: &[String]) -> String {
    let cleaned: Vec<String> = names
        .iter()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect();
    cleaned.join(" ")
}

impl Indexable for Vcn {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.display_name.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("state", self.state.to_lowercase()),
            ("cidrs", join_names(&self.cidr_blocks)),
            ("dns-label", self.dns_label.to_lowercase()),
            ("domain-name", self.domain_name.to_lowercase()),
            ("gateways", join_names(&self.gateway_names)),
            ("subnets", join_names(&self.subnet_names)),
            ("nsgs", join_names(&self.nsg_names)),
            ("route-tables", join_names(&self.route_table_names)),
            ("security-lists", join_names(&self.security_list_names)),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for Vcn {
    fn headers() -> &'static [&'static str] {
        &["NAME", "CIDRS", "DNS LABEL", "STATE"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.cidr_blocks.join(","),
            self.dns_label.clone(),
            self.state.clone(),
        ]
    }
}

pub fn search<'a>(vcns: &'a [Vcn], pattern: &str) -> Result<Vec<&'a Vcn>, SearchError> {
    search_collection(vcns, &FIELDS, pattern)
}

pub fn list(vcns: &[Vcn], limit: usize, page: usize) -> Page<Vcn> {
    paginate_slice(vcns, limit, page)
}
