//! Page fetching.
//!
//! The reader talks to the wiki through the [`PageSource`] trait. With the
//! `fetch` feature, [`HttpSource`] implements it over HTTP with reqwest.

use url::Url;

use crate::{Result, WikiError};

/// Something that can return the HTML behind a URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Returns the body of the page at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Returns the URL `url` finally lands on after redirects.
    async fn resolve(&self, url: &str) -> Result<String>;
}

/// HTTP client configuration for fetching wiki pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string. The wiki rejects the defaults of common HTTP clients.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 30, user_agent: "Mozilla/5.0 (compatible; wikireader/1.0)".to_string() }
    }
}

/// Joins a base URL and a page identifier, checking the result is a URL.
pub fn page_url(base_url: &str, identifier: &str) -> Result<Url> {
    let raw = format!("{}{}", base_url, identifier);
    let url = Url::parse(&raw).map_err(|e| WikiError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(WikiError::InvalidUrl(format!("{}: scheme must be http or https", raw)));
    }

    Ok(url)
}

/// URL of the site search for `words` on the wiki hosting `base_url`.
///
/// ```rust
/// use wikireader_core::fetch::search_url;
///
/// let url = search_url("http://en.wikipedia.org/wiki/", &["grace", "hopper"]).unwrap();
/// assert_eq!(url.as_str(), "http://en.wikipedia.org/w/index.php?title=Special%3ASearch&search=grace+hopper");
/// ```
pub fn search_url<S: AsRef<str>>(base_url: &str, words: &[S]) -> Result<Url> {
    let mut url = page_url(base_url, "")?.join("/w/index.php").map_err(|e| WikiError::InvalidUrl(e.to_string()))?;

    let query = words.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" ");
    url.query_pairs_mut()
        .append_pair("title", "Special:Search")
        .append_pair("search", &query);

    Ok(url)
}

#[cfg(feature = "fetch")]
pub use http::HttpSource;

#[cfg(feature = "fetch")]
mod http {
    use std::time::Duration;

    use reqwest::{Client, Response};
    use tracing::debug;
    use url::Url;

    use super::{FetchConfig, PageSource};
    use crate::{Result, WikiError};

    /// [`PageSource`] backed by a reqwest client.
    ///
    /// Redirects are followed and non-success statuses are errors.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: Client,
        config: FetchConfig,
    }

    impl HttpSource {
        pub fn new(config: FetchConfig) -> Result<Self> {
            let client = Client::builder()
                .timeout(Duration::from_secs(config.timeout))
                .user_agent(&config.user_agent)
                .build()
                .map_err(WikiError::HttpError)?;

            Ok(Self { client, config })
        }

        async fn get(&self, url: &str) -> Result<Response> {
            let parsed_url = Url::parse(url).map_err(|e| WikiError::InvalidUrl(e.to_string()))?;
            debug!(url = %parsed_url, "fetching page");

            let response = self
                .client
                .get(parsed_url)
                .header("Accept", "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        WikiError::Timeout { timeout: self.config.timeout }
                    } else {
                        WikiError::HttpError(e)
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(WikiError::HttpStatus { status: status.as_u16(), url: url.to_string() });
            }

            Ok(response)
        }
    }

    impl PageSource for HttpSource {
        async fn fetch(&self, url: &str) -> Result<String> {
            let body = self.get(url).await?.text().await?;
            debug!(bytes = body.len(), "page fetched");
            Ok(body)
        }

        async fn resolve(&self, url: &str) -> Result<String> {
            let response = self.get(url).await?;
            Ok(response.url().to_string())
        }
    }
}
