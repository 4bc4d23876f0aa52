//! Tolerant parsing of content-rewrite model responses.
//!
//! The external model is asked for strict JSON but routinely wraps its
//! answer in markdown fences, buries it in prose, or leaves trailing commas
//! behind. This module normalizes such responses and falls back to
//! deterministic local analysis when nothing usable can be recovered, so
//! callers always receive a well-formed result.

use crate::error::{Result, VerbaError};
use crate::extract::extract_basic_keywords;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Character budget for a meta description, per common SERP display limits.
pub const DEFAULT_META_LENGTH: usize = 160;

/// Maximum keywords carried over from a model response.
const MAX_SUGGESTED_KEYWORDS: usize = 8;

/// Maximum improvement and recommendation entries carried over.
const MAX_ADVICE_ENTRIES: usize = 5;

/// Words taken from the start of the source text for a locally generated
/// meta description.
const META_PREVIEW_WORDS: usize = 20;

/// Structured enhancement payload expected from the model.
///
/// Every field is defaulted so a partial response still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OracleEnhancement {
    /// Rewritten version of the input text.
    #[serde(default)]
    pub enhanced_text: String,

    /// Keywords the model suggests targeting.
    #[serde(default)]
    pub suggested_keywords: Vec<String>,

    /// Specific SEO improvements the model claims to have applied.
    #[serde(default)]
    pub seo_improvements: Vec<String>,

    /// Structural advice for the document.
    #[serde(default)]
    pub structure_recommendations: Vec<String>,
}

/// Advice returned when the model response cannot be parsed.
const FALLBACK_IMPROVEMENTS: [&str; 4] = [
    "Consider adding more relevant keywords naturally",
    "Improve paragraph structure for better readability",
    "Add subheadings to organize content",
    "Include call-to-action phrases",
];

const FALLBACK_RECOMMENDATIONS: [&str; 4] = [
    "Use shorter sentences for better readability",
    "Add bullet points where appropriate",
    "Include relevant internal and external links",
    "Optimize for featured snippets",
];

/// Normalize a raw model response into a parseable JSON string.
///
/// Strips markdown code fences, extracts the outermost `{...}` region when
/// the object is embedded in surrounding prose, and removes trailing commas
/// before closing braces and brackets.
pub fn clean_payload(raw: &str) -> String {
    let fence_open = Regex::new(r"```json\s*").unwrap();
    let fence = Regex::new(r"```\s*").unwrap();

    let mut content = fence_open.replace_all(raw, "").to_string();
    content = fence.replace_all(&content, "").trim().to_string();

    let object_region = Regex::new(r"(?s)\{.*\}").unwrap();
    if let Some(m) = object_region.find(&content) {
        content = m.as_str().to_string();
    }

    let trailing_comma_brace = Regex::new(r",\s*\}").unwrap();
    let trailing_comma_bracket = Regex::new(r",\s*\]").unwrap();
    content = trailing_comma_brace.replace_all(&content, "}").to_string();
    content = trailing_comma_bracket.replace_all(&content, "]").to_string();

    content
}

/// Parse a model enhancement response strictly.
///
/// The payload is cleaned with [`clean_payload`] first. Returns
/// [`VerbaError::MissingPayload`] when no JSON object is present and
/// [`VerbaError::Json`] when the object is malformed beyond repair. List
/// fields are clamped to the documented maximums.
pub fn parse_enhancement(raw: &str) -> Result<OracleEnhancement> {
    let cleaned = clean_payload(raw);
    if !cleaned.starts_with('{') {
        return Err(VerbaError::MissingPayload);
    }

    let mut enhancement: OracleEnhancement = serde_json::from_str(&cleaned)?;
    enhancement.suggested_keywords.truncate(MAX_SUGGESTED_KEYWORDS);
    enhancement.seo_improvements.truncate(MAX_ADVICE_ENTRIES);
    enhancement.structure_recommendations.truncate(MAX_ADVICE_ENTRIES);

    Ok(enhancement)
}

/// Parse a model enhancement response, degrading to local analysis.
///
/// On any parse failure the original text is returned unmodified together
/// with locally mined keywords and fixed fallback advice, so this function
/// is total over arbitrary model output. A parsed response with an empty
/// `enhanced_text` also falls back to the original text.
pub fn enhancement_or_fallback(raw: &str, original: &str) -> OracleEnhancement {
    match parse_enhancement(raw) {
        Ok(mut enhancement) => {
            if enhancement.enhanced_text.is_empty() {
                enhancement.enhanced_text = original.to_string();
            }
            enhancement
        }
        Err(_) => fallback_enhancement(original),
    }
}

/// Deterministic enhancement payload built entirely from the input text.
fn fallback_enhancement(original: &str) -> OracleEnhancement {
    OracleEnhancement {
        enhanced_text: original.to_string(),
        suggested_keywords: extract_basic_keywords(original, MAX_SUGGESTED_KEYWORDS),
        seo_improvements: FALLBACK_IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        structure_recommendations: FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Clean a model-produced list of title suggestions.
///
/// The model is asked for five bare titles, one per line, but tends to
/// number them, quote them, or prefix them with "Title:". Each line is
/// stripped of that decoration; lines outside the useful 11-70 character
/// range are dropped and at most five titles are returned.
pub fn clean_title_suggestions(raw: &str) -> Vec<String> {
    let numbering = Regex::new(r"^\d+[.)\-:]\s*").unwrap();
    let title_prefix = Regex::new(r"(?i)^title\s*\d*[:\-]?\s*").unwrap();

    let mut titles: Vec<String> = Vec::new();
    for line in raw.lines() {
        let mut title = line.trim().to_string();
        title = numbering.replace(&title, "").to_string();
        title = title.trim_matches(|c| matches!(c, '"' | '\'' | '`')).to_string();
        title = title_prefix.replace(&title, "").trim().to_string();

        let length = title.chars().count();
        if length > 10 && length <= 70 {
            titles.push(title);
        }
    }

    titles.truncate(MAX_ADVICE_ENTRIES);
    titles
}

/// Clean a model-produced meta description and enforce the length budget.
pub fn clean_meta_description(raw: &str, max_length: usize) -> String {
    let prefix = Regex::new(r"(?i)^meta description:\s*").unwrap();

    let description = raw.trim().trim_matches(|c| matches!(c, '"' | '\'' | '`'));
    let description = prefix.replace(description, "").to_string();

    truncate_at_word_boundary(&description, max_length)
}

/// Build a meta description from the text itself when the model is
/// unavailable: the first words of the content, trimmed to the budget.
pub fn fallback_meta_description(text: &str, max_length: usize) -> String {
    let preview: Vec<&str> = text.split_whitespace().take(META_PREVIEW_WORDS).collect();
    truncate_at_word_boundary(&preview.join(" "), max_length)
}

/// Shorten text to `max_length` characters, cutting at a word boundary and
/// appending an ellipsis. Text already within budget is returned unchanged.
fn truncate_at_word_boundary(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let head: String = text.chars().take(max_length.saturating_sub(3)).collect();
    let words: Vec<&str> = head.split_whitespace().collect();

    if words.len() > 1 {
        format!("{}...", words[..words.len() - 1].join(" "))
    } else {
        format!("{}...", head.trim_end())
    }
}
