//! Google News search scraper.
//!
//! Each keyword is searched with a single GET to
//! `https://news.google.com/search?q=<keyword>&hl=en-US&gl=US&ceid=US:en`.
//! The result page is parsed and the listings are handed to the
//! [`FieldExtractor`].
//!
//! # Candidate listings
//!
//! Listings are `<article>` elements. Older layouts wrapped them in
//! `div.xrnccd` instead, so that selector is tried when the first finds
//! nothing.

use crate::errors::{ExtractionError, FetchError};
use crate::models::ArticleRecord;
use crate::scrapers::PageSource;
use crate::scrapers::extract::{FieldExtractor, compile};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://news.google.com";

/// Desktop browser identity; the bare client string gets rejected.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Tried in order; the first one matching anything is used.
const CANDIDATE_SELECTORS: &[&str] = &["article", "div.xrnccd"];

/// Build the search URL for `keyword` under `base_url`.
pub fn search_url(base_url: &Url, keyword: &str) -> Result<Url, FetchError> {
    let url = format!(
        "{}/search?q={}&hl=en-US&gl=US&ceid=US:en",
        base_url.as_str().trim_end_matches('/'),
        urlencoding::encode(keyword)
    );
    Ok(Url::parse(&url)?)
}

/// [`PageSource`] backed by a `reqwest` client.
///
/// No cookies, no explicit timeout, the client's default redirect policy.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Build the client that sends every request with [`USER_AGENT`].
    ///
    /// # Returns
    ///
    /// The page source, or [`FetchError::Client`] if the TLS backend or the
    /// client configuration cannot be initialised.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn get_page(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        debug!(bytes = body.len(), "Downloaded result page");
        Ok(body)
    }
}

/// Searches one keyword at a time and extracts its result listings.
#[derive(Debug)]
pub struct GoogleNewsFetcher<S> {
    source: S,
    base_url: Url,
    candidates: Vec<Selector>,
    extractor: FieldExtractor,
}

impl<S: PageSource> GoogleNewsFetcher<S> {
    pub fn new(source: S, base_url: Url) -> Result<Self, ExtractionError> {
        let candidates = CANDIDATE_SELECTORS
            .iter()
            .map(|c| compile(c))
            .collect::<Result<Vec<_>, _>>()?;
        let extractor = FieldExtractor::new(base_url.clone())?;
        Ok(Self {
            source,
            base_url,
            candidates,
            extractor,
        })
    }

    /// Search `keyword` and extract at most `max_results` records.
    ///
    /// A failed request is logged and yields an empty vector so the caller
    /// can move on to the next keyword.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_for_keyword(&self, keyword: &str, max_results: usize) -> Vec<ArticleRecord> {
        match self.fetch_page(keyword).await {
            Ok(body) => {
                let records = self.parse_results(&body, max_results);
                info!(count = records.len(), "Extracted articles");
                records
            }
            Err(e) => {
                error!(error = %e, "Search request failed");
                Vec::new()
            }
        }
    }

    async fn fetch_page(&self, keyword: &str) -> Result<String, FetchError> {
        let url = search_url(&self.base_url, keyword)?;
        self.source.get_page(&url).await
    }

    /// Extract records from a result page body.
    ///
    /// Listings past `max_results` are never extracted. Listings that fail
    /// extraction are logged and dropped; the rest keep document order.
    pub fn parse_results(&self, body: &str, max_results: usize) -> Vec<ArticleRecord> {
        let document = Html::parse_document(body);
        let nodes = self.candidate_nodes(&document);
        debug!(candidates = nodes.len(), "Located candidate listings");

        nodes
            .into_iter()
            .take(max_results)
            .enumerate()
            .filter_map(|(index, node)| match self.extractor.extract(node) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping unreadable listing");
                    None
                }
            })
            .collect()
    }

    fn candidate_nodes<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        self.candidates
            .iter()
            .map(|selector| document.select(selector).collect::<Vec<_>>())
            .find(|nodes| !nodes.is_empty())
            .unwrap_or_default()
    }
}
