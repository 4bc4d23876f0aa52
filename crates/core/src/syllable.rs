/// Vowel set used for syllable nucleus detection, `y` included.
const VOWELS: &str = "aeiouy";

/// Punctuation stripped from both ends of a token before counting.
const EDGE_PUNCTUATION: &str = ".,;:!?'\"()[]";

/// Estimate the number of syllables in a single word.
///
/// Counts vowel groups rather than individual vowels: a counter increments
/// each time a vowel follows a non-vowel, which approximates spoken syllable
/// nuclei without a phonetic dictionary. A trailing `e` is treated as silent
/// when at least one other group was found. Every word counts as at least one
/// syllable, including tokens that are all digits or symbols.
///
/// # Example
///
/// ```rust
/// use verba_core::count_syllables;
///
/// assert_eq!(count_syllables("cat"), 1);
/// assert_eq!(count_syllables("reading"), 2);
/// assert_eq!(count_syllables("?!"), 1);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let cleaned = word.trim_matches(|c| EDGE_PUNCTUATION.contains(c)).to_lowercase();

    if cleaned.is_empty() {
        return 1;
    }

    let mut count = 0;
    let mut previous_was_vowel = false;

    for c in cleaned.chars() {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    // Silent-e correction: "make" is one syllable, not two.
    if cleaned.ends_with('e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("cat", 1)]
    #[case("happy", 2)]
    #[case("beautiful", 3)]
    #[case("make", 1)]
    #[case("readability", 5)]
    #[case("queue", 1)]
    fn test_common_words(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn test_empty_word_counts_one() {
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn test_punctuation_only_counts_one() {
        assert_eq!(count_syllables("?!"), 1);
        assert_eq!(count_syllables("..."), 1);
    }

    #[test]
    fn test_digits_count_one() {
        assert_eq!(count_syllables("12345"), 1);
    }

    #[test]
    fn test_edge_punctuation_is_stripped() {
        assert_eq!(count_syllables("happy,"), count_syllables("happy"));
        assert_eq!(count_syllables("\"happy\""), count_syllables("happy"));
    }

    #[test]
    fn test_silent_e_not_applied_to_single_group() {
        // "the" has a single vowel group; the trailing e must not drop it to zero.
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("e"), 1);
    }

    #[test]
    fn test_consonant_only_token() {
        assert_eq!(count_syllables("hmm"), 1);
    }

    #[test]
    fn test_uppercase_is_case_insensitive() {
        assert_eq!(count_syllables("HAPPY"), count_syllables("happy"));
    }

    #[test]
    fn test_never_zero() {
        for word in ["", "x", "bcd", "!!!", "aeiou", "strengths"] {
            assert!(count_syllables(word) >= 1, "word {:?} returned zero syllables", word);
        }
    }
}
