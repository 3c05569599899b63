mod echo;
mod settings;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;
use wikireader_core::{
    FetchConfig, Granularity, HttpSource, ReaderConfig, Section, SectionMode, TitleInput, WikiReader,
};

use crate::settings::Overrides;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read wiki articles, headlines and trivia from the terminal
#[derive(Parser, Debug)]
#[command(name = "wikireader")]
#[command(version)]
#[command(about = "Read wiki articles, headlines and trivia from the terminal", long_about = None)]
#[command(group(ArgGroup::new("action").args(["news", "did_you_know", "today", "article"]).multiple(false)))]
struct Args {
    /// Title of the article to read (a random article if omitted), or its URL
    #[arg(value_name = "ARTICLE")]
    article: Vec<String>,

    /// Display the latest headlines
    #[arg(short, long)]
    news: bool,

    /// Display some interesting facts
    #[arg(short = 'd', long = "didyouknow")]
    did_you_know: bool,

    /// Display noteworthy events that occurred on this date
    #[arg(short, long)]
    today: bool,

    /// Look the article up with the wiki's search instead of by exact title
    #[arg(short, long, requires = "article")]
    search: bool,

    /// List the article's image sources instead of its text
    #[arg(short, long, conflicts_with_all = ["news", "did_you_know", "today"])]
    images: bool,

    /// Output mode (terse, summary, full, random); remembered for later runs
    #[arg(short, long, value_name = "MODE")]
    mode: Option<Granularity>,

    /// Wiki URL to read from (e.g. http://en.wikipedia.org/wiki/)
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Wikipedia language (e.g. sv)
    #[arg(short, long, value_name = "LANG")]
    language: Option<String>,

    /// Settings file (default: ~/.wikireader)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides { mode: self.mode, url: self.url.clone(), language: self.language.clone() }
    }

    fn section(&self) -> Option<Section> {
        if self.news {
            Some(Section::News)
        } else if self.did_you_know {
            Some(Section::DidYouKnow)
        } else if self.today {
            Some(Section::Today)
        } else {
            None
        }
    }

    /// A single argument that looks like a URL is used as-is.
    fn title(&self) -> TitleInput {
        match self.article.as_slice() {
            [single] if single.contains("://") => TitleInput::RawIdentifier(single.clone()),
            words => TitleInput::WordTokens(words.to_vec()),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "wikireader", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if args.verbose {
        echo::print_banner();
    }

    match run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            echo::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

/// Loads settings, reads what was asked for, and saves the settings back.
async fn run(args: &Args) -> anyhow::Result<String> {
    let path = settings::settings_path(args.config.as_deref())?;
    let config = settings::merge(settings::load(&path), &args.overrides());

    let result = read(args, &config).await;

    if let Err(err) = settings::save(&path, &config) {
        echo::print_warning(&format!("{:#}", err));
    }

    result
}

async fn read(args: &Args, config: &ReaderConfig) -> anyhow::Result<String> {
    let fetch_config = FetchConfig { timeout: args.timeout, ..Default::default() };
    let source = HttpSource::new(fetch_config).context("Failed to set up the HTTP client")?;
    let reader = WikiReader::new(source, config.clone());
    let mut rng = rand::thread_rng();

    if let Some(section) = args.section() {
        if args.verbose {
            echo::print_step(&format!("Reading {} from {}", section, config.base_url()));
        }
        let mode = SectionMode::from(config.mode);
        return reader
            .read_section(section, mode, &mut rng)
            .await
            .with_context(|| format!("Failed to read {}", section));
    }

    let title = if args.search {
        reader.search(&args.article).await.context("Search failed")?
    } else {
        args.title()
    };
    let identifier = reader.identifier(&title);

    if args.verbose {
        echo::print_step(&format!("Reading {}{} ({})", config.base_url(), identifier, config.mode));
    }

    if args.images {
        let article = reader
            .parse_article(&title)
            .await
            .with_context(|| format!("Failed to read {}", identifier))?;
        return Ok(article.image_sources().collect::<Vec<_>>().join("\n"));
    }

    reader
        .read_article(&title, config.mode, &mut rng)
        .await
        .with_context(|| format!("Failed to read {}", identifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_url_argument_is_raw() {
        let args = Args::parse_from(["wikireader", "https://en.wikipedia.org/wiki/Alan_Turing"]);
        assert_eq!(
            args.title(),
            TitleInput::RawIdentifier("https://en.wikipedia.org/wiki/Alan_Turing".to_string())
        );
    }

    #[test]
    fn test_words_are_tokens() {
        let args = Args::parse_from(["wikireader", "alan", "turing"]);
        assert_eq!(args.title(), TitleInput::WordTokens(vec!["alan".to_string(), "turing".to_string()]));
        assert_eq!(args.section(), None);
    }

    #[test]
    fn test_section_flags() {
        assert_eq!(Args::parse_from(["wikireader", "-d"]).section(), Some(Section::DidYouKnow));
        assert_eq!(Args::parse_from(["wikireader", "--today"]).section(), Some(Section::Today));
    }

    #[test]
    fn test_sections_are_exclusive() {
        assert!(Args::try_parse_from(["wikireader", "-n", "-t"]).is_err());
        assert!(Args::try_parse_from(["wikireader", "-n", "rust"]).is_err());
    }

    #[test]
    fn test_images_conflict_with_sections() {
        assert!(Args::try_parse_from(["wikireader", "-i", "-n"]).is_err());
        assert!(Args::try_parse_from(["wikireader", "--images", "--didyouknow"]).is_err());
        assert!(Args::try_parse_from(["wikireader", "-i", "-t"]).is_err());
        assert!(Args::parse_from(["wikireader", "-i", "rust"]).images);
    }

    #[test]
    fn test_mode_is_validated() {
        let args = Args::parse_from(["wikireader", "-m", "terse", "rust"]);
        assert_eq!(args.mode, Some(Granularity::Terse));
        assert!(Args::try_parse_from(["wikireader", "-m", "verbose"]).is_err());
    }
}
