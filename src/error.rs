// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the search core.
//!
//! The taxonomy is deliberately narrow: only caller-contract violations are
//! errors. A pattern that matches nothing and a page past the end of the
//! collection are ordinary empty results, not error conditions.

use thiserror::Error;

/// Errors produced by index construction and the match engine.
///
/// Every variant is a programming error in the calling domain code, never a
/// transient runtime condition. There is nothing here worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The domain declared no searchable fields at all.
    #[error("no searchable fields declared")]
    EmptyFieldSpec,

    /// The search pattern was empty or whitespace-only.
    #[error("search pattern is empty")]
    EmptyPattern,

    /// A boosted field is not part of the searchable field declaration.
    #[error("boosted field `{0}` is not in the searchable field set")]
    UnknownBoostedField(String),
}
