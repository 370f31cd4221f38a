// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Autonomous databases.

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
pub struct AutonomousDatabase {
    pub name: String,
    pub ocid: String,
    pub state: String,
    pub db_version: String,
    pub workload: String,
    pub license_model: String,
    pub vcn_name: String,
    pub subnet_name: String,
    pub private_endpoint: String,
    pub private_endpoint_ip: String,
    pub whitelisted_ips: Vec<String>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "ocid",
        "state",
        "db-version",
        "workload",
        "license-model",
        "vcn-name",
        "subnet-name",
        "private-endpoint",
        "private-endpoint-ip",
        "whitelisted-ips",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "ocid", "vcn-name", "subnet-name"],
};

impl Indexable for AutonomousDatabase {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.name.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("state", self.state.to_lowercase()),
            ("db-version", self.db_version.to_lowercase()),
            ("workload", self.workload.to_lowercase()),
            ("license-model", self.license_model.to_lowercase()),
            ("vcn-name", self.vcn_name.to_lowercase()),
            ("subnet-name", self.subnet_name.to_lowercase()),
            ("private-endpoint", self.private_endpoint.to_lowercase()),
            ("private-endpoint-ip", self.private_endpoint_ip.to_lowercase()),
            ("whitelisted-ips", self.whitelisted_ips.join(" ").to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for AutonomousDatabase {
    fn headers() -> &'static [&'static str] {
        &["NAME", "WORKLOAD", "VERSION", "STATE", "PRIVATE IP"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.workload.clone(),
            self.db_version.clone(),
            self.state.clone(),
            self.private_endpoint_ip.clone(),
        ]
    }
}

pub fn search<'a>(
    databases: &'a [AutonomousDatabase],
    pattern: &str,
) -> Result<Vec<&'a AutonomousDatabase>, SearchError> {
    search_collection(databases, &FIELDS, pattern)
}

pub fn list(
    databases: &[AutonomousDatabase],
    limit: usize,
    page: usize,
) -> Page<AutonomousDatabase> {
    paginate_slice(databases, limit, page)
}
