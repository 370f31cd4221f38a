// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Two-phase match engine.
//!
//! Given an ephemeral index, a free-text pattern, and the domain's boosted
//! field subset, produce an ordered, de-duplicated list of original
//! collection positions.
//!
//! # Algorithm
//!
//! 1. The normalized pattern is classified (see [`crate::pattern`]). A
//!    high-specificity pattern — an identifier or address fragment — first
//!    runs **Phase A**: a scan of every declared field blob for full-field
//!    equality, then substring containment. Phase A hits are ordered exact
//!    before substring, boosted field before non-boosted, then original
//!    position.
//! 2. Records not matched by Phase A (all records, for general patterns) run
//!    **Phase B**: per pattern word, token-prefix hits and bounded
//!    edit-distance hits accumulate an integer score, with boosted fields
//!    weighted more heavily. Phase B hits are ordered any-boosted-hit first,
//!    then score descending, then original position. Zero-hit records are
//!    excluded entirely.
//! 3. The result is Phase A order followed by Phase B order.
//!
//! # Ordering invariants
//!
//! - Phase A hits always precede Phase B hits.
//! - Within each phase, boosted-field matches precede non-boosted matches.
//! - Remaining ties break by original collection position ascending, so the
//!   output is deterministic for a fixed collection, field declaration, and
//!   pattern.
//!
//! Scores are an internal ordering device and are never exposed to callers.

use std::cmp::Reverse;

use tracing::debug;

use crate::error::SearchError;
use crate::index::SearchIndex;
use crate::indexable::{FieldSpec, Indexable};
use crate::levenshtein::edit_distance_within;
use crate::pattern::{classify, PatternClass};
use crate::text::normalize;

/// Tunable policy for classification, typo tolerance, and ranking weights.
///
/// The defaults treat long or delimiter-bearing single tokens as identifiers,
/// scale the edit budget with word length, and weight prefix hits above fuzzy
/// ones; tests pin the boundaries. Weights are ordinal — only the orderings
/// they induce are contractual, not the numeric values.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Single tokens at least this long classify as high-specificity.
    pub specific_len: usize,
    /// Structural delimiter characters that mark a token as identifier-like.
    pub specific_delimiters: &'static str,
    /// Pattern words shorter than this get no edit budget.
    pub typo_min_len: usize,
    /// Pattern words at least this long get a two-edit budget.
    pub typo_two_len: usize,
    /// Score contribution of a token-prefix hit.
    pub prefix_weight: u32,
    /// Score contribution of an edit-distance hit.
    pub fuzzy_weight: u32,
    /// Multiplier applied to hits in boosted fields.
    pub boost_weight: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            specific_len: 15,
            specific_delimiters: ".:-_/[]@",
            typo_min_len: 4,
            typo_two_len: 8,
            prefix_weight: 3,
            fuzzy_weight: 2,
            boost_weight: 2,
        }
    }
}

impl SearchConfig {
    /// Length-proportional edit budget for a pattern word.
    pub(crate) fn edit_budget(&self, word_len: usize) -> usize {
        if word_len < self.typo_min_len {
            0
        } else if word_len < self.typo_two_len {
            1
        } else {
            2
        }
    }
}

/// A Phase A hit, ordered by (containment, boost, position).
struct ExactHit {
    /// 0 = full-field equality, 1 = substring containment.
    containment: u8,
    /// false when the hit landed in a boosted field.
    unboosted: bool,
    position: usize,
}

/// A Phase B hit, ordered by (boost, score desc, position).
struct FuzzyHit {
    unboosted: bool,
    score: u32,
    position: usize,
}

/// Search the index with the default [`SearchConfig`].
pub fn fuzzy_search(
    index: &SearchIndex,
    pattern: &str,
    boosted: &[&str],
) -> Result<Vec<usize>, SearchError> {
    fuzzy_search_with(index, pattern, boosted, &SearchConfig::default())
}

/// Search the index, returning ordered original-collection positions.
///
/// Errors on an empty/whitespace pattern and on boosted fields missing from
/// the index's declaration. A pattern that matches nothing is an empty `Ok`.
pub fn fuzzy_search_with(
    index: &SearchIndex,
    pattern: &str,
    boosted: &[&str],
    config: &SearchConfig,
) -> Result<Vec<usize>, SearchError> {
    let pattern = normalize(pattern);
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }

    let mut boosted_at = vec![false; index.fields().len()];
    for name in boosted {
        match index.field_position(name) {
            Some(i) => boosted_at[i] = true,
            None => return Err(SearchError::UnknownBoostedField((*name).to_string())),
        }
    }

    let mut results: Vec<usize> = Vec::new();
    let mut matched = vec![false; index.len()];

    let class = classify(&pattern, config);
    if class == PatternClass::HighSpecificity {
        let mut hits: Vec<ExactHit> = Vec::new();
        for position in 0..index.len() {
            let entry = index.entry(position);
            let mut best: Option<(u8, bool)> = None;
            for (field, blob) in entry.blobs.iter().enumerate() {
                if blob.is_empty() {
                    continue;
                }
                let containment = if *blob == pattern {
                    0
                } else if blob.contains(&pattern) {
                    1
                } else {
                    continue;
                };
                let rank = (containment, !boosted_at[field]);
                if best.map_or(true, |current| rank < current) {
                    best = Some(rank);
                }
            }
            if let Some((containment, unboosted)) = best {
                hits.push(ExactHit {
                    containment,
                    unboosted,
                    position,
                });
            }
        }
        hits.sort_by_key(|h| (h.containment, h.unboosted, h.position));
        for hit in &hits {
            matched[hit.position] = true;
            results.push(hit.position);
        }
    }

    // Phase B: tolerant matching over everything Phase A did not claim.
    let words: Vec<&str> = pattern.split(' ').collect();
    let mut hits: Vec<FuzzyHit> = Vec::new();
    for position in 0..index.len() {
        if matched[position] {
            continue;
        }
        let entry = index.entry(position);
        let mut score: u32 = 0;
        let mut boosted_hit = false;
        for (field, tokens) in entry.tokens.iter().enumerate() {
            let field_weight = if boosted_at[field] {
                config.boost_weight
            } else {
                1
            };
            for word in &words {
                let budget = config.edit_budget(word.chars().count());
                for token in tokens {
                    if token.starts_with(word) {
                        score += config.prefix_weight * field_weight;
                    } else if budget > 0 && edit_distance_within(token, word, budget) {
                        score += config.fuzzy_weight * field_weight;
                    } else {
                        continue;
                    }
                    boosted_hit |= boosted_at[field];
                }
            }
        }
        if score > 0 {
            hits.push(FuzzyHit {
                unboosted: !boosted_hit,
                score,
                position,
            });
        }
    }
    hits.sort_by_key(|h| (h.unboosted, Reverse(h.score), h.position));
    results.extend(hits.iter().map(|h| h.position));

    debug!(
        pattern = %pattern,
        class = ?class,
        candidates = index.len(),
        matches = results.len(),
        "fuzzy search complete"
    );

    Ok(results)
}

/// Build an index over `records` and search it, translating positions back
/// into record references. The one-stop entry point used by every domain.
///
/// Caller-contract errors are raised before any index work: a blank pattern
/// never pays for projecting the collection.
pub fn search_collection<'a, T: Indexable>(
    records: &'a [T],
    spec: &FieldSpec,
    pattern: &str,
) -> Result<Vec<&'a T>, SearchError> {
    spec.validate()?;
    let pattern = normalize(pattern);
    if pattern.is_empty() {
        return Err(SearchError::EmptyPattern);
    }
    let index = SearchIndex::build(records, spec.searchable)?;
    let positions = fuzzy_search(&index, &pattern, spec.boosted)?;
    Ok(positions.into_iter().map(|p| &records[p]).collect())
}
