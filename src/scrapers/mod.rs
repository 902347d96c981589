//! Search result scraping.
//!
//! Collection works in two steps per keyword:
//!
//! 1. **Fetching**: [`google_news`] builds the search URL and downloads the
//!    result page through a [`PageSource`]
//! 2. **Extraction**: [`extract`] turns each candidate listing on the page
//!    into an [`ArticleRecord`](crate::models::ArticleRecord)
//!
//! Both steps are best-effort: a failed request yields no records for that
//! keyword and an unreadable listing is skipped, without failing the batch.

pub mod extract;
pub mod google_news;

use crate::errors::FetchError;
use url::Url;

/// Anything that can return the body of a page.
///
/// The HTTP client implements this in production; tests supply canned pages
/// or failures.
pub trait PageSource {
    /// Download `url` and return its body as text.
    async fn get_page(&self, url: &Url) -> Result<String, FetchError>;
}
