//! List-item extraction from the wiki's main page.
//!
//! The main page carries three sections the reader can print: current news,
//! "did you know" facts and "on this day" events. Each is a list whose items
//! may end in a fixed navigation phrase that has to be stripped.

use std::fmt;

use rand::Rng;

use crate::Result;
use crate::markup::SiteMarkup;
use crate::parse::Document;
use crate::summarize::{BLOCK_SEPARATOR, Granularity, pick};

/// A main-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// "In the news" headlines.
    News,
    /// "Did you know..." facts.
    DidYouKnow,
    /// "On this day" events.
    Today,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::News => "in the news",
            Self::DidYouKnow => "did you know",
            Self::Today => "on this day",
        };
        f.write_str(name)
    }
}

/// How section items are combined into output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMode {
    /// Every item, separated by blank lines.
    #[default]
    All,
    /// One item picked at random.
    Random,
}

impl From<Granularity> for SectionMode {
    fn from(granularity: Granularity) -> Self {
        match granularity {
            Granularity::Random => Self::Random,
            _ => Self::All,
        }
    }
}

/// Collects the cleaned items of `section` from a parsed main page.
pub fn section_items(doc: &Document, markup: &SiteMarkup, section: Section) -> Result<Vec<String>> {
    let section_markup = markup.section(section);
    let items = doc
        .texts(&section_markup.items)?
        .into_iter()
        .map(|text| clean_item(&text, section_markup.boilerplate.as_deref()))
        .collect();
    Ok(items)
}

/// Removes the section boilerplate (exact match) and surrounding whitespace.
pub fn clean_item(text: &str, boilerplate: Option<&str>) -> String {
    match boilerplate {
        Some(phrase) => text.replace(phrase, "").trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Combines section items into output text.
///
/// No items is not an error: the result is an empty string in either mode.
pub fn combine_items<R: Rng + ?Sized>(items: &[String], mode: SectionMode, rng: &mut R) -> String {
    match mode {
        SectionMode::Random => pick(items, rng).unwrap_or_default(),
        SectionMode::All => items.join(BLOCK_SEPARATOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    const MAIN_PAGE: &str = r#"
        <div id="mp-itn"><ul>
            <li>  A volcano erupts.  </li>
            <li>Elections are held.</li>
            <li>Wikinews – Recent deaths – More current events...</li>
        </ul></div>
        <div id="mp-dyk"><ul>
            <li>... that cats sleep a lot?</li>
            <li>Archive – Start a new article – Nominate an article</li>
        </ul></div>
        <div id="mp-otd"><ul>
            <li>
                1969 – Humans land on the Moon.
            </li>
        </ul></div>
    "#;

    fn items(section: Section) -> Vec<String> {
        let doc = Document::parse(MAIN_PAGE).unwrap();
        section_items(&doc, &SiteMarkup::default(), section).unwrap()
    }

    #[test]
    fn test_news_strips_boilerplate() {
        assert_eq!(items(Section::News), vec!["A volcano erupts.", "Elections are held.", ""]);
    }

    #[test]
    fn test_did_you_know_strips_boilerplate() {
        assert_eq!(items(Section::DidYouKnow), vec!["... that cats sleep a lot?", ""]);
    }

    #[test]
    fn test_today_only_trims() {
        assert_eq!(items(Section::Today), vec!["1969 – Humans land on the Moon."]);
    }

    #[test]
    fn test_boilerplate_inside_item() {
        let text = "Storm hits coast Wikinews – Recent deaths – More current events... ";
        let cleaned = clean_item(text, Some("Wikinews – Recent deaths – More current events..."));
        assert_eq!(cleaned, "Storm hits coast");
    }

    #[test]
    fn test_combine_all() {
        let list = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(combine_items(&list, SectionMode::All, &mut rng), "x\n\ny\n\nz");
    }

    #[test]
    fn test_combine_random_returns_one_item() {
        let list = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let out = combine_items(&list, SectionMode::Random, &mut rng);
            assert!(list.contains(&out));
        }
    }

    #[test]
    fn test_combine_random_follows_stubbed_index() {
        let list = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        // gen_range(0..3) maps 0x8000_0000 to 1 and 0xAAAA_AAAB to 2.
        assert_eq!(combine_items(&list, SectionMode::Random, &mut StepRng::new(0, 0)), "x");
        assert_eq!(combine_items(&list, SectionMode::Random, &mut StepRng::new(0x8000_0000, 0)), "y");
        assert_eq!(combine_items(&list, SectionMode::Random, &mut StepRng::new(0xAAAA_AAAB, 0)), "z");
    }

    #[test]
    fn test_combine_empty_is_empty_string() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(combine_items(&[], SectionMode::All, &mut rng), "");
        assert_eq!(combine_items(&[], SectionMode::Random, &mut rng), "");
    }

    #[test]
    fn test_mode_from_granularity() {
        assert_eq!(SectionMode::from(Granularity::Random), SectionMode::Random);
        assert_eq!(SectionMode::from(Granularity::Terse), SectionMode::All);
    }
}
