//! # Biotech News
//!
//! Collects biotech and biopharma headlines from Google News search results
//! and saves them as JSON and CSV.
//!
//! ## Usage
//!
//! ```sh
//! biotech_news
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: search each keyword, one request at a time with a pause
//!    in between
//! 2. **Extraction**: pull title, link, source, time and snippet out of every
//!    result listing, up to a per-keyword cap
//! 3. **Deduplication**: keep the first article seen for each title
//! 4. **Output**: preview on stdout, then write `biotech_news.json` and
//!    `biotech_news.csv`

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod collector;
mod errors;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use collector::Collector;
use outputs::{console, csv_file, json};
use scrapers::google_news::{GoogleNewsFetcher, HttpPageSource};
use utils::ensure_writable_parent;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("biotech_news starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Fail before spending a minute on requests if the output can't be written.
    for path in [&args.json_output, &args.csv_output] {
        if let Err(e) = ensure_writable_parent(path).await {
            error!(path = %path.display(), error = %e, "Output location is not writable");
            return Err(e);
        }
    }

    let base_url = Url::parse(&args.base_url)?;
    let fetcher = GoogleNewsFetcher::new(HttpPageSource::new()?, base_url)?;
    let collector = Collector::new(fetcher, args.delay());

    let keywords = args.keywords();
    info!(keywords = keywords.len(), "Collecting biotech/biopharma news");
    let articles = collector.collect_all(&keywords, args.max_per_keyword).await;

    println!("\nCollected {} unique articles", articles.len());
    console::print_articles(&articles, args.print_limit);

    json::write_articles(&articles, &args.json_output).await?;
    csv_file::write_articles(&articles, &args.csv_output).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = articles.len(),
        "Execution complete"
    );

    Ok(())
}
