use serde::Serialize;

/// Density and location of one keyword within a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMetrics {
    /// The keyword as supplied by the caller.
    pub keyword: String,

    /// Occurrences per hundred words.
    pub density: f64,

    /// Ascending byte offsets of each occurrence in the lowercased text.
    pub positions: Vec<usize>,
}

/// Calculate keyword density as a percentage of total words.
///
/// The numerator counts case-insensitive substring occurrences, not
/// word-aligned matches, so a keyword repeated inside one long token still
/// counts every time and the result can exceed 100 for pathological input.
/// That numeric range is load-bearing for existing consumers and is kept
/// as-is. Returns 0.0 when either input is empty or the text has no words.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    if text.is_empty() || keyword.is_empty() {
        return 0.0;
    }

    let total_words = text.split_whitespace().count();
    if total_words == 0 {
        return 0.0;
    }

    let occurrences = text.to_lowercase().matches(&keyword.to_lowercase()).count();

    occurrences as f64 / total_words as f64 * 100.0
}

/// Find every occurrence of a keyword in text, case-insensitively.
///
/// The scan resumes one byte past each match start, so overlapping
/// occurrences are all reported: `"aa"` in `"aaa"` yields `[0, 1]`.
/// Positions are strictly ascending and index into the lowercased text.
pub fn keyword_positions(text: &str, keyword: &str) -> Vec<usize> {
    if text.is_empty() || keyword.is_empty() {
        return Vec::new();
    }

    let haystack = text.to_lowercase();
    let needle = keyword.to_lowercase();

    let mut positions = Vec::new();
    let mut start = 0;

    while let Some(offset) = haystack[start..].find(&needle) {
        let position = start + offset;
        positions.push(position);
        // Resume one character past the match start so overlapping
        // occurrences are still found.
        let step = haystack[position..].chars().next().map_or(1, char::len_utf8);
        start = position + step;
    }

    positions
}

/// Bundle density and positions for one keyword.
pub fn keyword_metrics(text: &str, keyword: &str) -> KeywordMetrics {
    KeywordMetrics {
        keyword: keyword.to_string(),
        density: keyword_density(text, keyword),
        positions: keyword_positions(text, keyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_counts_per_hundred_words() {
        // 1 occurrence over 10 words.
        let text = "rust is fast and rustaceans like that it is fast";
        assert_eq!(keyword_density(text, "fast"), 20.0);
    }

    #[test]
    fn test_density_case_insensitive() {
        assert_eq!(keyword_density("Rust and RUST and rust", "rust"), 60.0);
    }

    #[test]
    fn test_density_zero_when_absent() {
        assert_eq!(keyword_density("nothing to see here", "keyword"), 0.0);
    }

    #[test]
    fn test_density_empty_inputs() {
        assert_eq!(keyword_density("", "kw"), 0.0);
        assert_eq!(keyword_density("some text", ""), 0.0);
        assert_eq!(keyword_density("", ""), 0.0);
    }

    #[test]
    fn test_density_counts_substrings_inside_words() {
        // Substring matching is intentional: "go" matches inside "going".
        assert_eq!(keyword_density("going to go now", "go"), 50.0);
    }

    #[test]
    fn test_density_can_exceed_one_hundred() {
        assert_eq!(keyword_density("ababab", "ab"), 300.0);
    }

    #[test]
    fn test_positions_basic() {
        assert_eq!(keyword_positions("the cat and the hat", "the"), vec![0, 12]);
    }

    #[test]
    fn test_positions_overlapping() {
        assert_eq!(keyword_positions("aaa", "aa"), vec![0, 1]);
        assert_eq!(keyword_positions("aaaa", "aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_positions_case_insensitive() {
        assert_eq!(keyword_positions("SEO seo SeO", "seo"), vec![0, 4, 8]);
    }

    #[test]
    fn test_positions_absent_keyword() {
        assert!(keyword_positions("hello world", "rust").is_empty());
    }

    #[test]
    fn test_positions_empty_inputs() {
        assert!(keyword_positions("", "kw").is_empty());
        assert!(keyword_positions("text", "").is_empty());
    }

    #[test]
    fn test_positions_strictly_ascending_and_in_bounds() {
        let text = "banana banana banana";
        let positions = keyword_positions(text, "ana");
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for p in positions {
            assert!(p < text.len());
        }
    }

    #[test]
    fn test_keyword_metrics_bundle() {
        let metrics = keyword_metrics("the cat and the hat", "the");
        assert_eq!(metrics.keyword, "the");
        assert_eq!(metrics.positions, vec![0, 12]);
        assert_eq!(metrics.density, 40.0);
    }

    #[test]
    fn test_keyword_metrics_serializes() {
        let metrics = keyword_metrics("alpha beta", "beta");
        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"keyword\":\"beta\""));
        assert!(json.contains("\"positions\":[6]"));
    }
}
