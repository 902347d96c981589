//! Keyword-by-keyword collection and cross-keyword deduplication.
//!
//! Keywords are searched strictly one after another with a fixed pause after
//! each request, whether or not it succeeded. Records are deduplicated by
//! title once every keyword has been searched; the first record seen for a
//! title wins, so its `search_keyword` is the earliest keyword that found it.

use crate::models::ArticleRecord;
use crate::scrapers::PageSource;
use crate::scrapers::google_news::GoogleNewsFetcher;
use itertools::Itertools;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Search terms used when none are given on the command line.
pub const BIOTECH_KEYWORDS: &[&str] = &[
    "biotech",
    "biotechnology",
    "biopharma",
    "biopharmaceutical",
    "pharmaceutical",
    "drug development",
    "clinical trial",
    "FDA approval",
    "gene therapy",
    "immunotherapy",
    "vaccine",
    "CRISPR",
    "stem cell",
    "protein",
    "antibody",
    "biosimilar",
];

/// Pause between two searches.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Keep the first record for each title, preserving order.
pub fn dedup_by_title(records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .unique_by(|r| r.title().to_string())
        .collect()
}

/// Runs a [`GoogleNewsFetcher`] over a list of keywords.
#[derive(Debug)]
pub struct Collector<S> {
    fetcher: GoogleNewsFetcher<S>,
    delay: Duration,
}

impl<S: PageSource> Collector<S> {
    /// Create a collector.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Searches a single keyword
    /// * `delay` - Pause after every search, failed or not
    pub fn new(fetcher: GoogleNewsFetcher<S>, delay: Duration) -> Self {
        Self { fetcher, delay }
    }

    /// Search every keyword in order and return the deduplicated records.
    ///
    /// # Arguments
    ///
    /// * `keywords` - Search terms, searched in this order
    /// * `max_per_keyword` - Cap on listings extracted per search
    ///
    /// # Returns
    ///
    /// Records in first-seen order with unique titles. Never fails: a
    /// keyword whose search failed simply contributes no records.
    #[instrument(level = "info", skip(self, keywords), fields(keyword_count = keywords.len()))]
    pub async fn collect_all<K: AsRef<str>>(
        &self,
        keywords: &[K],
        max_per_keyword: usize,
    ) -> Vec<ArticleRecord> {
        let mut collected = Vec::new();

        for keyword in keywords.iter().map(AsRef::as_ref) {
            info!(%keyword, "Searching");
            let records = self.fetcher.fetch_for_keyword(keyword, max_per_keyword).await;
            collected.extend(records.into_iter().map(|r| r.tagged(keyword)));

            sleep(self.delay).await;
        }

        let total = collected.len();
        let unique = dedup_by_title(collected);
        debug!(total, duplicates = total - unique.len(), "Deduplicated by title");
        info!(count = unique.len(), "Collection complete");
        unique
    }
}
