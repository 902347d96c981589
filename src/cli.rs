//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary without arguments
//! performs the standard biotech collection and writes both files into the
//! working directory.

use crate::collector::{BIOTECH_KEYWORDS, DEFAULT_REQUEST_DELAY};
use crate::scrapers::google_news::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Standard run
/// biotech_news
///
/// # Two custom keywords, ten results each, into ./out
/// biotech_news -k "mRNA" -k "ADC" -n 10 --json-output out/news.json --csv-output out/news.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Search keyword; repeat to search several. Defaults to the built-in biotech list
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Maximum number of articles extracted per keyword
    #[arg(short = 'n', long, default_value_t = 5)]
    pub max_per_keyword: usize,

    /// Number of articles previewed on stdout
    #[arg(short, long, default_value_t = 3)]
    pub print_limit: usize,

    /// Pause after each search, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Path of the JSON output file
    #[arg(long, default_value = "biotech_news.json")]
    pub json_output: PathBuf,

    /// Path of the CSV output file
    #[arg(long, default_value = "biotech_news.csv")]
    pub csv_output: PathBuf,

    /// Base URL of the news search site
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl Cli {
    /// Keywords to search, in order.
    pub fn keywords(&self) -> Vec<String> {
        if self.keywords.is_empty() {
            BIOTECH_KEYWORDS.iter().map(|k| k.to_string()).collect()
        } else {
            self.keywords.clone()
        }
    }

    /// Pause after each search, from `--delay-ms`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["biotech_news"]);

        assert_eq!(cli.max_per_keyword, 5);
        assert_eq!(cli.print_limit, 3);
        assert_eq!(cli.delay(), Duration::from_secs(1));
        assert_eq!(cli.json_output, PathBuf::from("biotech_news.json"));
        assert_eq!(cli.csv_output, PathBuf::from("biotech_news.csv"));
        assert_eq!(cli.base_url, "https://news.google.com");
        assert_eq!(cli.keywords().len(), BIOTECH_KEYWORDS.len());
        assert_eq!(cli.keywords()[5], "drug development");
    }

    #[test]
    fn test_cli_keyword_override() {
        let cli = Cli::parse_from([
            "biotech_news",
            "-k",
            "mRNA",
            "--keyword",
            "gene editing",
            "-n",
            "10",
        ]);

        assert_eq!(cli.keywords(), vec!["mRNA", "gene editing"]);
        assert_eq!(cli.max_per_keyword, 10);
    }

    #[test]
    fn test_cli_output_paths() {
        let cli = Cli::parse_from([
            "biotech_news",
            "--json-output",
            "/tmp/out/news.json",
            "--csv-output",
            "/tmp/out/news.csv",
            "--delay-ms",
            "0",
        ]);

        assert_eq!(cli.json_output, PathBuf::from("/tmp/out/news.json"));
        assert_eq!(cli.csv_output, PathBuf::from("/tmp/out/news.csv"));
        assert_eq!(cli.delay(), Duration::ZERO);
    }
}
