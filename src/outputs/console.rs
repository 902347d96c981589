//! Human-readable preview of collected articles on stdout.

use crate::models::ArticleRecord;
use crate::utils::truncate_chars;
use std::fmt::Write;

/// Snippets are cut to this many characters in the preview.
const SNIPPET_PREVIEW_CHARS: usize = 200;

/// Render the first `limit` records as numbered blocks.
///
/// Snippet and link lines are omitted when the record has none.
pub fn render_articles(records: &[ArticleRecord], limit: usize) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().take(limit).enumerate() {
        let keyword = match record.search_keyword.as_str() {
            "" => "N/A",
            k => k,
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "\n--- Article {} ---", i + 1);
        let _ = writeln!(out, "Title: {}", record.title());
        let _ = writeln!(out, "Source: {}", record.source());
        let _ = writeln!(out, "Time: {}", record.timestamp());
        let _ = writeln!(out, "Keyword: {keyword}");
        if !record.snippet.is_empty() {
            let _ = writeln!(
                out,
                "Snippet: {}...",
                truncate_chars(&record.snippet, SNIPPET_PREVIEW_CHARS)
            );
        }
        if let Some(link) = &record.link {
            let _ = writeln!(out, "Link: {link}");
        }
    }
    out
}

/// Print the first `limit` records to stdout.
pub fn print_articles(records: &[ArticleRecord], limit: usize) {
    print!("{}", render_articles(records, limit));
}
