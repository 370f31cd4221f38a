// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Compute images.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TableRecord;
use crate::error::SearchError;
use crate::indexable::{FieldSpec, Indexable};
use crate::paginate::{paginate_slice, Page};
use crate::search::search_collection;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub display_name: String,
    pub operating_system: String,
    pub operating_system_version: String,
    pub ocid: String,
    pub launch_mode: String,
    pub time_created: String,
}

pub const FIELDS: FieldSpec = FieldSpec {
    searchable: &["name", "operating-system", "os-version", "ocid", "launch-mode"],
    boosted: &["name", "operating-system", "os-version"],
};

impl Indexable for Image {
    fn to_indexable(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("name", self.display_name.to_lowercase()),
            ("operating-system", self.operating_system.to_lowercase()),
            ("os-version", self.operating_system_version.to_lowercase()),
            ("ocid", self.ocid.to_lowercase()),
            ("launch-mode", self.launch_mode.to_lowercase()),
        ])
    }
}

impl TableRecord for Image {
    fn headers() -> &'static [&'static str] {
        &["NAME", "OS", "OS VERSION", "LAUNCH MODE", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.operating_system.clone(),
            self.operating_system_version.clone(),
            self.launch_mode.clone(),
            self.time_created.clone(),
        ]
    }
}

pub fn search<'a>(images: &'a [Image], pattern: &str) -> Result<Vec<&'a Image>, SearchError> {
    search_collection(images, &FIELDS, pattern)
}

pub fn list(images: &[Image], limit: usize, page: usize) -> Page<Image> {
    paginate_slice(images, limit, page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        Image {
            display_name: "Oracle-Linux-8.9-2024.01.26-0".to_string(),
            operating_system: "Oracle Linux".to_string(),
            operating_system_version: "8.9".to_string(),
            ocid: "ocid1.image.oc1..bbb".to_string(),
            launch_mode: "PARAVIRTUALIZED".to_string(),
            time_created: "2024-01-26 10:00:00".to_string(),
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
    fn searchable_by_os_phrase() {
        let images = [sample()];
        let found = search(&images, "oracle linux").unwrap();
        assert_eq!(found.len(), 1);
    }
}
