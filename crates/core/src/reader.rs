//! The wiki reader.
//!
//! [`WikiReader`] ties a [`PageSource`] to a [`ReaderConfig`] and exposes the
//! operations the CLI offers: reading an article, reading a main-page section,
//! and resolving a search. Each read fetches exactly one page.
//!
//! # Example
//!
//! ```rust,no_run
//! use wikireader_core::{FetchConfig, Granularity, HttpSource, ReaderConfig, TitleInput, WikiReader};
//!
//! # async fn example() -> wikireader_core::Result<()> {
//! let source = HttpSource::new(FetchConfig::default())?;
//! let reader = WikiReader::new(source, ReaderConfig::default());
//! let title = TitleInput::WordTokens(vec!["grace".into(), "hopper".into()]);
//! let text = reader.read_article(&title, Granularity::Terse, &mut rand::thread_rng()).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

use rand::Rng;
use tracing::debug;
use url::Url;

use crate::Result;
use crate::article::{ParsedArticle, raw_fallback_text};
use crate::config::ReaderConfig;
use crate::fetch::{PageSource, page_url, search_url};
use crate::markup::SiteMarkup;
use crate::parse::Document;
use crate::sections::{Section, SectionMode, combine_items, section_items};
use crate::summarize::{Granularity, Selection, summarize};
use crate::title::{PageIdentifier, TitleInput};

/// Reads articles and main-page sections from one wiki.
pub struct WikiReader<S> {
    source: S,
    config: ReaderConfig,
    markup: SiteMarkup,
}

impl<S: PageSource> WikiReader<S> {
    pub fn new(source: S, config: ReaderConfig) -> Self {
        Self { source, config, markup: SiteMarkup::default() }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn markup(&self) -> &SiteMarkup {
        &self.markup
    }

    /// Normalizes `input` against this wiki's host marker.
    pub fn identifier(&self, input: &TitleInput) -> PageIdentifier {
        PageIdentifier::normalize(input, &self.host_marker())
    }

    /// Host of the configured wiki, or the site-wide marker when the
    /// configured host already falls under it.
    fn host_marker(&self) -> String {
        Url::parse(&self.config.base_url())
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .filter(|host| !host.ends_with(self.markup.host_marker.as_str()))
            .unwrap_or_else(|| self.markup.host_marker.clone())
    }

    /// Fetches and parses a page.
    pub async fn document(&self, identifier: &PageIdentifier) -> Result<Document> {
        let url = page_url(&self.config.base_url(), identifier.as_str())?;
        let html = self.source.fetch(url.as_str()).await?;
        Document::parse(&html)
    }

    /// Fetches an article and extracts its paragraphs and images.
    pub async fn parse_article(&self, input: &TitleInput) -> Result<ParsedArticle> {
        let doc = self.document(&self.identifier(input)).await?;
        ParsedArticle::from_document(&doc, &self.markup)
    }

    /// Reads an article at the given granularity.
    ///
    /// Disambiguation pages override the granularity; see [`summarize`].
    pub async fn read_article<R: Rng + ?Sized>(
        &self, input: &TitleInput, granularity: Granularity, rng: &mut R,
    ) -> Result<String> {
        let identifier = self.identifier(input);
        let doc = self.document(&identifier).await?;
        let article = ParsedArticle::from_document(&doc, &self.markup)?;
        debug!(
            page = %identifier,
            paragraphs = article.paragraphs.len(),
            images = article.images.len(),
            "article extracted"
        );

        match summarize(&article, granularity, rng)? {
            Selection::Text(text) => Ok(text),
            Selection::RawFallback => {
                debug!(page = %identifier, "single-paragraph disambiguation page, using raw text");
                raw_fallback_text(&doc, &self.markup)
            }
        }
    }

    /// Reads one section of the main page.
    pub async fn read_section<R: Rng + ?Sized>(
        &self, section: Section, mode: SectionMode, rng: &mut R,
    ) -> Result<String> {
        let main_page = PageIdentifier::from(self.markup.main_page.as_str());
        let doc = self.document(&main_page).await?;
        let items = section_items(&doc, &self.markup, section)?;
        debug!(section = %section, items = items.len(), "section extracted");

        Ok(combine_items(&items, mode, rng))
    }

    /// Runs a site search and returns the page it lands on.
    pub async fn search<W: AsRef<str>>(&self, words: &[W]) -> Result<TitleInput> {
        let url = search_url(&self.config.base_url(), words)?;
        let landed = self.source.resolve(url.as_str()).await?;
        debug!(url = %landed, "search resolved");

        Ok(TitleInput::RawIdentifier(landed))
    }
}
