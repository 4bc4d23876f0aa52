//! Aggregate content report.
//!
//! This module combines the readability score, per-keyword metrics, and
//! locally mined keyword suggestions into the single [`ContentReport`] shape
//! a serving layer returns for one analysis request.

use crate::error::Result;
use crate::extract::{DEFAULT_KEYWORD_LIMIT, extract_basic_keywords};
use crate::metrics::{KeywordMetrics, keyword_metrics};
use crate::readability::{ReadabilityResult, score_readability};
use serde::Serialize;

/// The complete analysis of one piece of text.
#[derive(Debug, Clone, Serialize)]
pub struct ContentReport {
    /// Flesch Reading Ease scoring with its underlying counts.
    pub readability: ReadabilityResult,

    /// Density and positions for each caller-supplied target keyword.
    pub keywords: Vec<KeywordMetrics>,

    /// Keywords mined from the text itself, in first-occurrence order.
    pub suggested_keywords: Vec<String>,
}

impl ContentReport {
    /// Gets the report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Analyze text against a set of target keywords.
///
/// Pure and synchronous; safe to call concurrently on independent inputs.
///
/// # Example
///
/// ```rust
/// use verba_core::analyze_content;
///
/// let report = analyze_content("The cat sat. It was happy.", &["cat".to_string()]);
/// assert_eq!(report.readability.sentence_count, 2);
/// assert_eq!(report.keywords[0].positions, vec![4]);
/// ```
pub fn analyze_content(text: &str, target_keywords: &[String]) -> ContentReport {
    ContentReport {
        readability: score_readability(text),
        keywords: target_keywords.iter().map(|kw| keyword_metrics(text, kw)).collect(),
        suggested_keywords: extract_basic_keywords(text, DEFAULT_KEYWORD_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_combines_components() {
        let text = "Great content earns great rankings. Write clearly and readers will stay.";
        let report = analyze_content(text, &["content".to_string(), "absent".to_string()]);

        assert_eq!(report.readability.sentence_count, 2);
        assert_eq!(report.keywords.len(), 2);
        assert!(report.keywords[0].density > 0.0);
        assert!(report.keywords[1].positions.is_empty());
        assert!(report.suggested_keywords.contains(&"content".to_string()));
    }

    #[test]
    fn test_empty_text_report() {
        let report = analyze_content("", &["kw".to_string()]);
        assert_eq!(report.readability.score, 0.0);
        assert_eq!(report.keywords[0].density, 0.0);
        assert!(report.suggested_keywords.is_empty());
    }

    #[test]
    fn test_no_keywords() {
        let report = analyze_content("Some plain text here.", &[]);
        assert!(report.keywords.is_empty());
    }

    #[test]
    fn test_to_json_shape() {
        let report = analyze_content("The cat sat.", &["cat".to_string()]);
        let json = report.to_json().unwrap();
        assert!(json.is_object());
        assert!(json.get("readability").is_some());
        assert!(json.get("keywords").is_some());
        assert!(json.get("suggested_keywords").is_some());
    }
}
