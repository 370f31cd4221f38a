// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Compute instances.
//!
//! The richest adapter: instances are searchable by name, hostname, primary
//! IP, image, shape, identifier, attached network names, and both tag forms.

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
pub struct Instance {
    pub display_name: String,
    pub hostname: String,
    pub primary_ip: String,
    pub image_name: String,
    pub image_os: String,
    pub shape: String,
    pub ocid: String,
    pub state: String,
    pub vcn_name: String,
    pub subnet_name: String,
    pub security_list_names: Vec<String>,
    pub nsg_names: Vec<String>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &[
        "name",
        "hostname",
        "primary-ip",
        "image-name",
        "image-os",
        "shape",
        "ocid",
        "vcn-name",
        "subnet-name",
        "security-lists",
        "nsgs",
        "tags-kv",
        "tags-val",
    ],
    boosted: &["name", "hostname", "primary-ip", "ocid"],
};

impl Indexable for Instance {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.display_name.to_lowercase()),
            ("hostname", self.hostname.to_lowercase()),
            ("primary-ip", self.primary_ip.to_lowercase()),
            ("image-name", self.image_name.to_lowercase()),
            ("image-os", self.image_os.to_lowercase()),
            ("shape", self.shape.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("vcn-name", self.vcn_name.to_lowercase()),
            ("subnet-name", self.subnet_name.to_lowercase()),
            (
                "security-lists",
                self.security_list_names.join(" ").to_lowercase(),
            ),
            ("nsgs", self.nsg_names.join(" ").to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for Instance {
    fn headers() -> &'static [&'static str] {
        &["NAME", "PRIMARY IP", "SHAPE", "STATE", "SUBNET"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.primary_ip.clone(),
            self.shape.clone(),
            self.state.clone(),
            self.subnet_name.clone(),
        ]
    }
}

/// Fuzzy-search instances, preserving relevance order.
pub fn search<'a>(
    instances: &'a [Instance],
    pattern: &str,
) -> Result<Vec<&'a Instance>, SearchError> {
    search_collection(instances, &FIELDS, pattern)
}

/// Page through instances in their given order.
pub fn list(instances: &[Instance], limit: usize, page: usize) -> Page<Instance> {
    paginate_slice(instances, limit, page)
}
