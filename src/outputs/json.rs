//! JSON output.
//!
//! Records are written as one pretty-printed array (two-space indent). Non-
//! ASCII text is kept as-is rather than escaped.

use crate::errors::OutputError;
use crate::models::ArticleRecord;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Write `records` to `path`, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_articles(records: &[ArticleRecord], path: &Path) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;
    info!(count = records.len(), "Saved articles to JSON");
    Ok(())
}
