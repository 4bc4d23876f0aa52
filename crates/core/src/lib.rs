pub mod analysis;
pub mod error;
pub mod extract;
pub mod insert;
pub mod metrics;
pub mod oracle;
pub mod readability;
pub mod syllable;

pub use analysis::{ContentReport, analyze_content};
pub use error::{Result, VerbaError};
pub use extract::{DEFAULT_KEYWORD_LIMIT, extract_basic_keywords};
pub use insert::{insert_keyword, insert_keyword_with_rng};
pub use metrics::{KeywordMetrics, keyword_density, keyword_metrics, keyword_positions};
pub use oracle::{
    DEFAULT_META_LENGTH, OracleEnhancement, clean_meta_description, clean_payload, clean_title_suggestions,
    enhancement_or_fallback, fallback_meta_description, parse_enhancement,
};
pub use readability::{ReadabilityResult, score_readability};
pub use syllable::count_syllables;
