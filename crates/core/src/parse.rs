//! HTML parsing and CSS selector queries.
//!
//! This module provides the [`Document`] and [`Element`] wrappers the
//! extractors use to walk a fetched wiki page.
//!
//! # Example
//!
//! ```rust
//! use wikireader_core::parse::Document;
//!
//! let html = r#"<div id="mp-itn"><ul><li>One</li><li>Two</li></ul></div>"#;
//! let doc = Document::parse(html).unwrap();
//! let items = doc.texts("div#mp-itn li").unwrap();
//! assert_eq!(items, vec!["One", "Two"]);
//! ```

use scraper::{Html, Selector};

use crate::{Result, WikiError};

/// Represents a parsed HTML document.
///
/// The parser is lenient: malformed markup is repaired the way browsers do it,
/// so only invalid selectors fail.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Selects elements using a CSS selector, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WikiError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wikireader_core::parse::Document;
    ///
    /// let html = r#"<p>First</p><p>Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// assert_eq!(doc.select("p").unwrap().len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Collects the full text content of every element matching `selector`.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        Ok(self.select(selector)?.iter().map(Element::text).collect())
    }
}

/// A wrapper around scraper's ElementRef.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all descendant text nodes, the way
    /// `textContent` does in a browser.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute, `None` if it is absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| WikiError::HtmlParseError(format!("Invalid selector: {}", e)))
}
