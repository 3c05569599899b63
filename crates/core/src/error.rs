//! Error types for wikireader operations.
//!
//! This module defines the main error type [`WikiError`] which represents
//! everything that can go wrong while fetching a wiki page, parsing it, and
//! reducing it to readable text.
//!
//! # Example
//!
//! ```rust
//! use wikireader_core::{WikiError, Result};
//!
//! fn first_paragraph(paragraphs: &[String]) -> Result<&str> {
//!     paragraphs
//!         .first()
//!         .map(String::as_str)
//!         .ok_or(WikiError::EmptyExtraction("paragraphs"))
//! }
//! # assert!(first_paragraph(&[]).is_err());
//! ```

use thiserror::Error;

/// Main error type for wiki reading operations.
///
/// Fetch failures and parse failures are never retried; they surface to the
/// caller as-is. [`WikiError::ConfigCorrupt`] is meant to be recovered from by
/// falling back to [`crate::ReaderConfig::default`].
#[derive(Error, Debug)]
pub enum WikiError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures and connection problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when the base URL plus page identifier cannot be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned for markup or selectors the DOM layer cannot handle.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Nothing was found where at least one element was expected.
    #[error("No {0} could be extracted from the page")]
    EmptyExtraction(&'static str),

    /// Persisted configuration could not be read back.
    #[error("Configuration is corrupt: {0}")]
    ConfigCorrupt(String),
}

/// Result type alias for WikiError.
pub type Result<T> = std::result::Result<T, WikiError>;
