//! CSV output.
//!
//! Columns follow [`ArticleRecord`]'s field order: `title, link, source,
//! timestamp, snippet, search_keyword, collected_at`. An empty record list
//! writes nothing.

use crate::errors::OutputError;
use crate::models::ArticleRecord;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Write `records` to `path` with a header row.
///
/// Returns `false` without touching the file system when there is nothing
/// to write.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_articles(records: &[ArticleRecord], path: &Path) -> Result<bool, OutputError> {
    if records.is_empty() {
        warn!("No articles to save");
        return Ok(false);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Io(e.into_error()))?;

    fs::write(path, bytes).await?;
    info!(count = records.len(), "Saved articles to CSV");
    Ok(true)
}
