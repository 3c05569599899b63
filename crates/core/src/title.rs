//! Conversion of user input into wiki page identifiers.

use std::fmt;

/// Page requested when no title is given.
pub const RANDOM_PAGE: &str = "Special:Random";

/// What the caller asked to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleInput {
    /// Free-form title words, e.g. `["george", "washington"]`.
    WordTokens(Vec<String>),
    /// An identifier or full article URL, used as given.
    RawIdentifier(String),
}

/// The trailing path segment of an article URL, e.g. `George_Washington`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageIdentifier(String);

impl PageIdentifier {
    /// Normalizes `input` into an identifier.
    ///
    /// Words are capitalized and joined with `_`. A raw identifier containing
    /// `host_marker` is treated as a URL and reduced to its last path segment.
    /// Nothing is URL-escaped.
    pub fn normalize(input: &TitleInput, host_marker: &str) -> Self {
        match input {
            TitleInput::WordTokens(words) if words.is_empty() => Self(RANDOM_PAGE.to_string()),
            TitleInput::WordTokens(words) => {
                Self(words.iter().map(String::as_str).map(capitalize).collect::<Vec<_>>().join("_"))
            }
            TitleInput::RawIdentifier(raw) if raw.contains(host_marker) => {
                Self(raw.rsplit('/').next().unwrap_or_default().to_string())
            }
            TitleInput::RawIdentifier(raw) => Self(raw.clone()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageIdentifier {
    fn from(identifier: &str) -> Self {
        Self(identifier.to_string())
    }
}

impl fmt::Display for PageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
