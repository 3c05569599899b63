//! Selectors and boilerplate strings tied to the wiki's page layout.
//!
//! Every piece of site-specific markup the extractors rely on lives in
//! [`SiteMarkup`]. When the site changes its layout, this is the only thing
//! that needs to change.

use crate::sections::Section;

/// Markup contract for one revision of a wiki's HTML layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMarkup {
    /// Page identifier of the main page.
    pub main_page: String,
    /// Host marker identifying full article URLs on any language edition.
    pub host_marker: String,
    pub paragraph: String,
    pub image: String,
    /// Section headline elements, used by the disambiguation fallback.
    pub headline: String,
    pub news: SectionMarkup,
    pub did_you_know: SectionMarkup,
    pub today: SectionMarkup,
}

/// List-item selector and trailing boilerplate for one main-page section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkup {
    pub items: String,
    pub boilerplate: Option<String>,
}

impl SiteMarkup {
    /// Layout of Wikipedia's classic (pre-Vector 2022) skin.
    pub fn wikipedia() -> Self {
        Self {
            main_page: "Main_Page".to_string(),
            host_marker: "wikipedia.org".to_string(),
            paragraph: "p".to_string(),
            image: "img".to_string(),
            headline: ".mw-headline".to_string(),
            news: SectionMarkup {
                items: "div#mp-itn li".to_string(),
                boilerplate: Some("Wikinews – Recent deaths – More current events...".to_string()),
            },
            did_you_know: SectionMarkup {
                items: "div#mp-dyk li".to_string(),
                boilerplate: Some("Archive – Start a new article – Nominate an article".to_string()),
            },
            today: SectionMarkup { items: "div#mp-otd li".to_string(), boilerplate: None },
        }
    }

    /// Markup for a main-page section.
    pub fn section(&self, section: Section) -> &SectionMarkup {
        match section {
            Section::News => &self.news,
            Section::DidYouKnow => &self.did_you_know,
            Section::Today => &self.today,
        }
    }

    /// Selector matching paragraphs and headlines together, in document order.
    pub fn raw_fallback(&self) -> String {
        format!("{}, {}", self.paragraph, self.headline)
    }
}

impl Default for SiteMarkup {
    fn default() -> Self {
        Self::wikipedia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_has_no_boilerplate() {
        let markup = SiteMarkup::default();
        assert!(markup.section(Section::Today).boilerplate.is_none());
        assert!(markup.section(Section::News).boilerplate.is_some());
    }

    #[test]
    fn test_raw_fallback_selector() {
        assert_eq!(SiteMarkup::wikipedia().raw_fallback(), "p, .mw-headline");
    }
}
