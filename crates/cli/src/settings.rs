//! Settings persisted between runs.
//!
//! Settings are read once at startup, merged with the command-line overrides,
//! and written back when the run ends, whether it succeeded or not.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, warn};
use wikireader_core::{Granularity, ReaderConfig, ReaderConfigBuilder};

/// File name of the settings file in the home directory.
pub const SETTINGS_FILE: &str = ".wikireader";

/// Overrides given on the command line for this run.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<Granularity>,
    pub url: Option<String>,
    pub language: Option<String>,
}

/// Location of the settings file: `custom` if given, else `~/.wikireader`.
pub fn settings_path(custom: Option<&Path>) -> anyhow::Result<PathBuf> {
    match custom {
        Some(path) => Ok(path.to_path_buf()),
        None => dirs::home_dir()
            .map(|home| home.join(SETTINGS_FILE))
            .context("Could not determine the home directory for the settings file"),
    }
}

/// Loads settings, falling back to the defaults when the file is missing or
/// unreadable.
pub fn load(path: &Path) -> ReaderConfig {
    match fs::read_to_string(path) {
        Ok(json) => ReaderConfig::from_json(&json).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring corrupt settings");
            ReaderConfig::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings yet, using defaults");
            ReaderConfig::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read settings");
            ReaderConfig::default()
        }
    }
}

/// Applies command-line overrides. A language resets the URL to the language
/// template, so it wins over an explicit URL.
pub fn merge(config: ReaderConfig, overrides: &Overrides) -> ReaderConfig {
    let mut builder = ReaderConfigBuilder::from_config(config);

    if let Some(mode) = overrides.mode {
        builder = builder.mode(mode);
    }
    if let Some(url) = &overrides.url {
        builder = builder.source_url(url.as_str());
    }
    if let Some(language) = &overrides.language {
        builder = builder.language(language.as_str());
    }

    builder.build()
}

pub fn save(path: &Path, config: &ReaderConfig) -> anyhow::Result<()> {
    let json = config.to_json()?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write settings to {}", path.display()))?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}
