// Copyright 2025-present cloudscan contributors
// SPDX-License-Identifier: Apache-2.0

//! Pattern classification: decide how much the user already knows.
//!
//! A pattern that looks like a structured identifier or address fragment —
//! an OCID, a dotted-decimal IP fragment, a long hostname — deserves an
//! exact/substring pass before any fuzzy matching, because the user pasted
//! or retyped something specific. Short, common words and multi-word phrases
//! go straight to the tolerant strategy; exact-match prioritization buys them
//! nothing and costs recall.
//!
//! The classification is policy, not algorithm: the thresholds live in
//! [`SearchConfig`](crate::search::SearchConfig) so boundary behavior can be
//! pinned down by tests instead of magic numbers.

use crate::search::SearchConfig;

/// How the match engine should treat a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternClass {
    /// Identifier- or address-like: run the exact/substring phase first.
    HighSpecificity,
    /// Short or multi-word: go straight to the fuzzy/prefix phase.
    General,
}

/// Classify an already-normalized, non-empty pattern.
///
/// A pattern is high-specificity when it is a single token (no internal
/// whitespace) and either reaches the length threshold or contains a
/// structural delimiter. The delimiter rule covers dotted-decimal address
/// fragments ("10.0.1"), OCID fragments, and tag selectors ("env:prod").
pub fn classify(pattern: &str, config: &SearchConfig) -> PatternClass {
    if pattern.contains(' ') {
        return PatternClass::General;
    }
    if pattern.chars().count() >= config.specific_len {
        return PatternClass::HighSpecificity;
    }
    if pattern.chars().any(|c| config.specific_delimiters.contains(c)) {
        return PatternClass::HighSpecificity;
    }
    PatternClass::General
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(pattern: &str) -> PatternClass {
        classify(pattern, &SearchConfig::default())
    }

    #[test]
    fn short_words_are_general() {
        assert_eq!(classify_default("web"), PatternClass::General);
        assert_eq!(classify_default("prod"), PatternClass::General);
    }

    #[test]
    fn multi_word_phrases_are_general() {
        assert_eq!(classify_default("oracle linux"), PatternClass::General);
        // Even long phrases stay general: length only counts for single tokens.
        assert_eq!(
            classify_default("some quite long search phrase"),
            PatternClass::General
        );
    }

    #[test]
    fn full_ocids_are_high_specificity() {
        assert_eq!(
            classify_default("ocid1.instance.oc1..abcdef123456"),
            PatternClass::HighSpecificity
        );
    }

    #[test]
    fn dotted_decimal_fragments_are_high_specificity() {
        assert_eq!(classify_default("10.0.1"), PatternClass::HighSpecificity);
        assert_eq!(classify_default("10.0.1.5"), PatternClass::HighSpecificity);
    }

    #[test]
    fn delimited_tokens_are_high_specificity() {
        assert_eq!(classify_default("web-01"), PatternClass::HighSpecificity);
        assert_eq!(classify_default("env:prod"), PatternClass::HighSpecificity);
        assert_eq!(classify_default("a/b"), PatternClass::HighSpecificity);
    }

    #[test]
    fn length_threshold_boundary() {
        let config = SearchConfig::default();
        let below: String = "a".repeat(config.specific_len - 1);
        let at: String = "a".repeat(config.specific_len);
        assert_eq!(classify(&below, &config), PatternClass::General);
        assert_eq!(classify(&at, &config), PatternClass::HighSpecificity);
    }

    #[test]
    fn thresholds_are_tunable() {
        let config = SearchConfig {
            specific_len: 4,
            ..SearchConfig::default()
        };
        assert_eq!(classify("prod", &config), PatternClass::HighSpecificity);
        assert_eq!(classify("web", &config), PatternClass::General);
    }
}
