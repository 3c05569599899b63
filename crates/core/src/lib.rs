pub mod article;
pub mod config;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod parse;
pub mod reader;
pub mod sections;
pub mod sentence;
pub mod summarize;
pub mod title;

pub use article::{ParsedArticle, raw_fallback_text, strip_citations};
pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use error::{Result, WikiError};
#[cfg(feature = "fetch")]
pub use fetch::HttpSource;
pub use fetch::{FetchConfig, PageSource};
pub use markup::{SectionMarkup, SiteMarkup};
pub use parse::Document;
pub use reader::WikiReader;
pub use sections::{Section, SectionMode, clean_item, combine_items, section_items};
pub use sentence::split_paragraph;
pub use summarize::{Granularity, Selection, is_disambiguation, summarize};
pub use title::{PageIdentifier, TitleInput};
