// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and pagination over cloud resource inventories.
//!
//! This crate powers an admin CLI that lists and searches resources pulled
//! from a cloud tenancy snapshot. Any record type that can project itself
//! into named text fields gets free-text search with typo tolerance, and any
//! ordered collection gets stable one-based pagination.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ indexable.rs │────▶│   index.rs   │────▶│  search.rs   │
//! │  (Indexable, │     │ (SearchIndex │     │(fuzzy_search,│
//! │  FieldSpec)  │     │   ::build)   │     │ SearchConfig)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │            text.rs / pattern.rs / levenshtein.rs        │
//! │   (normalize, tokenize, pattern classification, edit    │
//! │    distance with early exit)                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! `paginate.rs` is independent of the search pipeline: it slices any
//! ordered collection into [`Page`]s with a decimal next-page token.
//! `domain/` holds the concrete resource records (instances, images,
//! clusters, ...) together with their declared field sets.
//!
//! # Usage
//!
//! ```ignore
//! use cloudscan::domain::instance::{self, Instance};
//! use cloudscan::paginate_slice;
//!
//! let instances: Vec<Instance> = load_snapshot()?;
//! let hits = instance::search(&instances, "web-frontend")?;
//! let page = paginate_slice(&instances, 20, 1);
//! ```

pub mod display;
pub mod domain;
pub mod error;
pub mod index;
pub mod indexable;
pub mod levenshtein;
pub mod paginate;
pub mod pattern;
pub mod search;
pub mod tags;
pub mod text;

pub use error::SearchError;
pub use index::SearchIndex;
pub use indexable::{FieldSpec, Indexable};
pub use levenshtein::edit_distance_within;
pub use paginate::{paginate_slice, Page};
pub use pattern::{classify, PatternClass};
pub use search::{fuzzy_search, fuzzy_search_with, search_collection, SearchConfig};
pub use tags::{flatten_tags, tag_values, DefinedTags, FreeformTags};
pub use text::normalize;
