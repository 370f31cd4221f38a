// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance with early exits.
//!
//! The fuzzy phase never needs the exact distance between a token and the
//! pattern, only whether it falls within a small budget. That allows two
//! shortcuts before and during the O(nm) DP:
//!
//! 1. `|len(a) - len(b)|` is a lower bound on edit distance, so a length gap
//!    beyond the budget rejects the pair without allocating.
//! 2. Once every cell in a DP row exceeds the budget, no later row can get
//!    back under it, so the scan stops early.

/// Are `a` and `b` within `max` edits (insert/delete/substitute) of each other?
///
/// Character-based, not byte-based, so multi-byte text is compared the way a
/// user perceives it.
pub fn edit_distance_within(a: &str, b: &str, max: usize) -> bool {
    if max == 0 {
        return a == b;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance.
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, cb) in b.chars().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        // Row minimum never decreases between rows.
        if row_min > max {
            return false;
        }
    }

    row[b_len] <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_need_zero_edits() {
        assert!(edit_distance_within("web-01", "web-01", 0));
        assert!(!edit_distance_within("web-01", "web-02", 0));
    }

    #[test]
    fn single_edit_variants() {
        assert!(edit_distance_within("instance", "instanse", 1));
        assert!(edit_distance_within("subnet", "subnets", 1));
        assert!(edit_distance_within("vcn", "vn", 1));
    }

    #[test]
    fn length_gap_short_circuits() {
        assert!(!edit_distance_within("db", "database", 2));
    }

    #[test]
    fn two_edit_budget() {
        assert!(edit_distance_within("loadbalancer", "loadbalanser", 2));
        assert!(edit_distance_within("kubernetes", "kubernates", 2));
        assert!(!edit_distance_within("bucket", "policy", 2));
    }

    #[test]
    fn unicode_is_compared_by_character() {
        assert!(edit_distance_within("cafe", "café", 1));
        assert!(edit_distance_within("zurich", "zürich", 1));
    }
}
