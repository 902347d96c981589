//! Error types for the collection pipeline and the output writers.
//!
//! Fetch and extraction errors are recovered where they happen: the fetcher
//! turns a [`FetchError`] into an empty result for that keyword, and the
//! extractor's [`ExtractionError`] only drops the offending node. Only
//! [`OutputError`] is allowed to reach `main`.

use thiserror::Error;

/// Failure of a single search request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid search URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure while reading fields off one candidate node.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("cannot resolve link `{href}` against {base}: {source}")]
    LinkJoin {
        href: String,
        base: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failure while persisting collected records.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
