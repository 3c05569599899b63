//! Reduction of a [`ParsedArticle`] to output text.
//!
//! The selector first checks whether the page is a disambiguation page, then
//! applies the requested [`Granularity`].

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::article::ParsedArticle;
use crate::sentence::split_paragraph;
use crate::{Result, WikiError};

/// Phrase that marks a disambiguation page's first paragraph.
pub const DISAMBIGUATION_MARKER: &str = "may refer to";

/// Separator placed between joined paragraphs or items.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// How much of an article to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// First sentence of the first paragraph.
    Terse,
    /// First paragraph.
    #[default]
    Summary,
    /// One paragraph picked at random.
    Random,
    /// Every paragraph. Unknown persisted values fall back to this.
    #[serde(other)]
    Full,
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terse" => Ok(Self::Terse),
            "summary" => Ok(Self::Summary),
            "full" => Ok(Self::Full),
            "random" => Ok(Self::Random),
            _ => Err(format!("Invalid mode: {}. Valid options: terse, summary, full, random", s)),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Terse => "terse",
            Self::Summary => "summary",
            Self::Full => "full",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}

/// Outcome of selecting text from an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Final output text.
    Text(String),
    /// Disambiguation page with a single paragraph; the caller must fall back
    /// to the raw paragraph-and-headline text of the page.
    RawFallback,
}

/// Whether the article is a disambiguation page.
pub fn is_disambiguation(article: &ParsedArticle) -> bool {
    article
        .paragraphs
        .first()
        .is_some_and(|first| first.contains(DISAMBIGUATION_MARKER))
}

/// Selects output text from `article` at the requested granularity.
///
/// Disambiguation pages with several paragraphs are always shown in full.
///
/// # Errors
///
/// Returns [`WikiError::EmptyExtraction`] when the article has no paragraphs.
pub fn summarize<R: Rng + ?Sized>(
    article: &ParsedArticle, granularity: Granularity, rng: &mut R,
) -> Result<Selection> {
    let paragraphs = &article.paragraphs;
    let first = paragraphs.first().ok_or(WikiError::EmptyExtraction("paragraphs"))?;

    let granularity = if is_disambiguation(article) {
        if paragraphs.len() == 1 {
            return Ok(Selection::RawFallback);
        }
        Granularity::Full
    } else {
        granularity
    };

    let text = match granularity {
        Granularity::Terse => split_paragraph(first).into_iter().next().unwrap_or_default(),
        Granularity::Summary => first.clone(),
        Granularity::Random => pick(paragraphs, rng).unwrap_or_default(),
        Granularity::Full => paragraphs.join(BLOCK_SEPARATOR),
    };

    Ok(Selection::Text(text))
}

/// Picks one item uniformly at random, `None` if there are none.
pub fn pick<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> Option<String> {
    items.choose(rng).cloned()
}
