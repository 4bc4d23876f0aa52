//! Error types for Verba operations.
//!
//! This module defines the main error type [`VerbaError`]. The analysis
//! functions themselves are total: empty or degenerate text yields
//! zero-valued metrics rather than an error. Only the strict model-response
//! parsing path and JSON serialization can fail.
//!
//! # Example
//!
//! ```rust
//! use verba_core::{VerbaError, parse_enhancement};
//!
//! match parse_enhancement("not json at all") {
//!     Ok(enhancement) => println!("keywords: {:?}", enhancement.suggested_keywords),
//!     Err(VerbaError::MissingPayload) => println!("response carried no JSON object"),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Main error type for content analysis operations.
#[derive(Error, Debug)]
pub enum VerbaError {
    /// Malformed JSON in a model response or during report serialization.
    ///
    /// Wraps the underlying `serde_json` error.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No JSON object could be located in a model response.
    ///
    /// Returned by the strict parsing path when the response contains no
    /// `{...}` region at all, even after markdown fences are stripped.
    #[error("No JSON object found in model response")]
    MissingPayload,
}

/// Result type alias for VerbaError.
///
/// This is a convenience alias for `std::result::Result<T, VerbaError>`.
pub type Result<T> = std::result::Result<T, VerbaError>;
