use regex::Regex;

/// Default number of keywords returned to callers that do not ask for a
/// specific count.
pub const DEFAULT_KEYWORD_LIMIT: usize = 15;

/// Candidate keywords are alphabetic runs of at least four letters.
const KEYWORD_TOKEN: &str = r"\b[a-z]{4,}\b";

/// Common English words that never make useful keywords.
const STOP_WORDS: [&str; 72] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one", "our", "out", "day",
    "get", "has", "him", "his", "how", "its", "new", "now", "old", "see", "two", "way", "who", "text", "this", "that",
    "with", "have", "from", "they", "been", "said", "each", "which", "their", "time", "will", "about", "would",
    "there", "could", "other", "after", "first", "well", "water", "than", "many", "where", "some", "what", "your",
    "when", "here", "more", "just", "like", "long", "make", "thing", "look", "right", "come", "good", "very", "much",
];

/// Extract candidate keywords from raw text.
///
/// This is the fallback keyword miner used when no model-derived keywords
/// are available: lowercase the text, keep alphabetic tokens of four or more
/// letters, drop stop words, deduplicate preserving first-occurrence order,
/// and truncate to `limit`. No frequency ranking is applied.
///
/// # Example
///
/// ```rust
/// use verba_core::extract_basic_keywords;
///
/// let keywords = extract_basic_keywords("Fresh content ranks. Stale content fades.", 10);
/// assert_eq!(keywords, vec!["fresh", "content", "ranks", "stale", "fades"]);
/// ```
pub fn extract_basic_keywords(text: &str, limit: usize) -> Vec<String> {
    let token_regex = Regex::new(KEYWORD_TOKEN).unwrap();
    let lowered = text.to_lowercase();

    let mut keywords: Vec<String> = Vec::new();
    for token in token_regex.find_iter(&lowered) {
        let word = token.as_str();
        if STOP_WORDS.contains(&word) {
            continue;
        }
        if keywords.iter().any(|k| k == word) {
            continue;
        }
        keywords.push(word.to_string());
    }

    keywords.truncate(limit);
    keywords
}
