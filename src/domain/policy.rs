// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Identity policies.
//!
//! Policy statements are joined into a single blob so a search for a verb or
//! group name ("manage", "administrators") finds the policies that mention
//! it.

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
pub struct Policy {
    pub name: String,
    pub description: String,
    pub ocid: String,
    pub statements: Vec<String>,
    pub freeform_tags: FreeformTags,
    pub defined_tags: DefinedTags,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &["name", "description", "ocid", "statements", "tags-kv", "tags-val"],
    boosted: &["name", "ocid", "statements", "tags-kv", "tags-val"],
};

impl Indexable for Policy {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.name.to_lowercase()),
            ("description", self.description.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("statements", self.statements.join(" ").to_lowercase()),
            ("tags-kv", flatten_tags(&self.freeform_tags, &self.defined_tags)),
            ("tags-val", tag_values(&self.freeform_tags, &self.defined_tags)),
        ])
    }
}

impl TableRecord for Policy {
    fn headers() -> &'static [&'static str] {
        &["NAME", "STATEMENTS", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.statements.len().to_string(),
            self.description.clone(),
        ]
    }
}

pub fn search<'a>(policies: &'a [Policy], pattern: &str) -> Result<Vec<&'a Policy>, SearchError> {
    search_collection(policies, &FIELDS, pattern)
}

pub fn list(policies: &[Policy], limit: usize, page: usize) -> Page<Policy> {
    paginate_slice(policies, limit, page)
}
