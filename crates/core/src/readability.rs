//! Flesch Reading Ease scoring.
//!
//! This module computes a 0-100 ease-of-reading score from average sentence
//! length and average syllables per word, using the syllable estimator in
//! [`crate::syllable`]. Higher scores mean easier text.
//!
//! # Example
//!
//! ```rust
//! use verba_core::score_readability;
//!
//! let result = score_readability("The cat sat. It was happy.");
//! assert_eq!(result.sentence_count, 2);
//! assert_eq!(result.word_count, 6);
//! assert!(result.score >= 0.0 && result.score <= 100.0);
//! ```

use crate::syllable::count_syllables;
use regex::Regex;
use serde::Serialize;

/// Pattern matching one run of sentence-terminating punctuation.
const SENTENCE_TERMINATORS: &str = r"[.!?]+";

/// Flesch Reading Ease formula constants. These are the published formula
/// values and must not be tuned.
const FLESCH_BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// The result of scoring a piece of text for readability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityResult {
    /// Flesch Reading Ease score, clamped to `[0, 100]`.
    pub score: f64,

    /// Number of terminator runs found, floored at 1 for non-empty text.
    pub sentence_count: usize,

    /// Number of whitespace-delimited tokens.
    pub word_count: usize,

    /// Words per sentence.
    pub avg_sentence_length: f64,

    /// Estimated syllables per word.
    pub avg_syllables_per_word: f64,
}

impl ReadabilityResult {
    /// All-zero result for text with no words.
    fn empty() -> Self {
        Self {
            score: 0.0,
            sentence_count: 0,
            word_count: 0,
            avg_sentence_length: 0.0,
            avg_syllables_per_word: 0.0,
        }
    }
}

/// Score text with the Flesch Reading Ease formula.
///
/// Sentences are runs of `.`, `!`, or `?`; text without any terminator is
/// treated as a single sentence. Text without any words short-circuits to an
/// all-zero result. The raw formula value is clamped to `[0, 100]`, so very
/// short simple text pins at 100 and dense jargon pins at 0.
pub fn score_readability(text: &str) -> ReadabilityResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return ReadabilityResult::empty();
    }

    let terminator_regex = Regex::new(SENTENCE_TERMINATORS).unwrap();
    let sentence_count = terminator_regex.find_iter(text).count().max(1);

    let word_count = words.len();
    let total_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = total_syllables as f64 / word_count as f64;

    let raw = FLESCH_BASE - SENTENCE_LENGTH_WEIGHT * avg_sentence_length - SYLLABLE_WEIGHT * avg_syllables_per_word;

    ReadabilityResult {
        score: raw.clamp(0.0, 100.0),
        sentence_count,
        word_count,
        avg_sentence_length,
        avg_syllables_per_word,
    }
}
