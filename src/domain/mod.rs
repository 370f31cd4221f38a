// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Resource domains and their search adapters.
//!
//! Each domain module pairs a typed record with the three things the core
//! needs from it: an [`Indexable`](crate::indexable::Indexable) projection, a
//! [`FieldSpec`](crate::indexable::FieldSpec) declaration, and thin
//! `search`/`list` wrappers. The match engine and paginator never see a
//! domain type.

pub mod bucket;
pub mod cache;
pub mod cluster;
pub mod database;
pub mod image;
pub mod instance;
pub mod policy;
pub mod vcn;

use serde::Deserialize;

/// A fully-materialized tenancy snapshot, as exported by the fetch tooling.
///
/// Every collection defaults to empty so partial snapshots load fine; an
/// absent domain simply lists and searches as zero records.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub instances: Vec<instance::Instance>,
    pub images: Vec<image::Image>,
    pub clusters: Vec<cluster::Cluster>,
    pub databases: Vec<database::AutonomousDatabase>,
    pub caches: Vec<cache::CacheCluster>,
    pub vcns: Vec<vcn::Vcn>,
    pub buckets: Vec<bucket::Bucket>,
    pub policies: Vec<policy::Policy>,
}

/// Projection of a record into table headers and cells for display.
pub trait TableRecord {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}
