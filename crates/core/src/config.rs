//! Reader configuration.
//!
//! [`ReaderConfig`] is the value the reader is driven by. Loading, merging and
//! persisting it is left to the caller; this module only defines the value and
//! its JSON form.
//!
//! # Example
//!
//! ```rust
//! use wikireader_core::{Granularity, ReaderConfig};
//!
//! let config = ReaderConfig::builder().mode(Granularity::Terse).language("sv").build();
//! assert_eq!(config.base_url(), "http://sv.wikipedia.org/wiki/");
//! ```

use serde::{Deserialize, Serialize};

use crate::summarize::Granularity;
use crate::{Result, WikiError};

/// Placeholder substituted with the language code in a source URL.
pub const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// Source URL template used when none is configured.
pub const DEFAULT_SOURCE_URL: &str = "http://{language}.wikipedia.org/wiki/";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Persisted reader settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Default output granularity.
    pub mode: Granularity,

    /// Wiki base URL, optionally containing `{language}`.
    pub source_url: String,

    /// Language code substituted into `source_url`.
    pub language: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            mode: Granularity::default(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ReaderConfig {
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::new()
    }

    /// The base URL with the language substituted, e.g. `http://en.wikipedia.org/wiki/`.
    pub fn base_url(&self) -> String {
        self.source_url.replace(LANGUAGE_PLACEHOLDER, &self.language)
    }

    /// Parses persisted settings.
    ///
    /// Missing fields take their defaults; anything unparseable is
    /// [`WikiError::ConfigCorrupt`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WikiError::ConfigCorrupt(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| WikiError::ConfigCorrupt(e.to_string()))
    }
}

/// Builder for ReaderConfig.
///
/// Setting a language resets the source URL to the language template so the
/// new language takes effect.
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    pub fn new() -> Self {
        Self { config: ReaderConfig::default() }
    }

    /// Starts from existing settings instead of the defaults.
    pub fn from_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn mode(mut self, mode: Granularity) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.config.source_url = url.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self.config.source_url = DEFAULT_SOURCE_URL.to_string();
        self
    }

    pub fn build(self) -> ReaderConfig {
        self.config
    }
}

impl Default for ReaderConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ReaderConfig::default();
        assert_eq!(config.mode, Granularity::Summary);
        assert_eq!(config.base_url(), "http://en.wikipedia.org/wiki/");
    }

    #[test]
    fn test_custom_url_without_placeholder() {
        let config = ReaderConfig::builder().source_url("https://wiki.example.org/wiki/").build();
        assert_eq!(config.base_url(), "https://wiki.example.org/wiki/");
    }

    #[test]
    fn test_language_resets_url() {
        let config = ReaderConfig::builder()
            .source_url("https://wiki.example.org/wiki/")
            .language("de")
            .build();
        assert_eq!(config.base_url(), "http://de.wikipedia.org/wiki/");
    }

    #[test]
    fn test_json_round_trip_keeps_template() {
        let config = ReaderConfig::builder().mode(Granularity::Random).language("sv").build();
        let json = config.to_json().unwrap();
        assert!(json.contains("{language}"));
        assert_eq!(ReaderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ReaderConfig::from_json(r#"{"mode": "terse"}"#).unwrap();
        assert_eq!(config.mode, Granularity::Terse);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_corrupt_json() {
        let result = ReaderConfig::from_json("[Output]\nmode = summary");
        assert!(matches!(result, Err(WikiError::ConfigCorrupt(_))));
    }
}
