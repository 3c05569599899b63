//! Paragraph and image extraction from a fetched article page.
//!
//! This module defines [`ParsedArticle`], the structured view of an article
//! that the selector reduces to output text.

use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::markup::SiteMarkup;
use crate::parse::Document;
use crate::summarize::BLOCK_SEPARATOR;

/// Bracketed numeric citation markers such as `[12]`.
#[allow(clippy::expect_used)]
static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[0-9]+\]").expect("CITATION regex"));

/// Paragraphs and images of an article, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArticle {
    /// Text of every paragraph with citation markers removed.
    pub paragraphs: Vec<String>,

    /// `src` of every image; `None` where the attribute is missing.
    pub images: Vec<Option<String>>,
}

impl ParsedArticle {
    pub fn new(paragraphs: Vec<String>, images: Vec<Option<String>>) -> Self {
        Self { paragraphs, images }
    }

    /// Extracts paragraphs and images from `doc`.
    ///
    /// A page without paragraphs yields an empty list here; the selector is
    /// what rejects it.
    pub fn from_document(doc: &Document, markup: &SiteMarkup) -> Result<Self> {
        let paragraphs = doc
            .texts(&markup.paragraph)?
            .iter()
            .map(|text| strip_citations(text))
            .collect();

        let images = doc
            .select(&markup.image)?
            .iter()
            .map(|img| img.attr("src").map(str::to_string))
            .collect();

        Ok(Self { paragraphs, images })
    }

    /// Image sources that are actually present.
    pub fn image_sources(&self) -> impl Iterator<Item = &str> {
        self.images.iter().filter_map(|src| src.as_deref())
    }
}

/// Text of every paragraph and headline of `doc`, in document order.
///
/// Used in place of the normal selection for single-paragraph disambiguation
/// pages, where the candidate topics live in list headings. Citation markers
/// are kept.
pub fn raw_fallback_text(doc: &Document, markup: &SiteMarkup) -> Result<String> {
    Ok(doc.texts(&markup.raw_fallback())?.join(BLOCK_SEPARATOR))
}

/// Removes every `[N]` citation marker from `text`.
pub fn strip_citations(text: &str) -> String {
    CITATION.replace_all(text, "").into_owned()
}
