//! Small helpers for text preview and output path checks.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Keep at most `max` characters of `s`.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("short", 100), "short");
/// assert_eq!(truncate_chars("état civil", 4), "état");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Ensure the directory that will hold `file` exists and is writable.
///
/// Creates the directory when missing, then creates and removes a probe
/// file. A bare file name checks the working directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(file = %file.display()))]
pub async fn ensure_writable_parent(file: &Path) -> Result<(), Box<dyn Error>> {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).await?;

    let probe_path = dir.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    if let Err(e) = stdfs::remove_file(&probe_path) {
        warn!(path = %probe_path.display(), error = %e, "Failed to remove write probe");
    }
    info!(dir = %dir.display(), "Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_string() {
        assert_eq!(truncate_chars("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_chars_long_string() {
        let s = "a".repeat(500);
        assert_eq!(truncate_chars(&s, 200).len(), 200);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("Impfstoff für Kinder", 15), "Impfstoff für K");
        assert_eq!(truncate_chars("抗体医薬", 2), "抗体");
    }

    #[test]
    fn test_truncate_chars_exact_length() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("nested/out/biotech_news.json");

        ensure_writable_parent(&file).await.unwrap();

        assert!(tmp.path().join("nested/out").is_dir());
        assert!(!tmp.path().join("nested/out/..__probe_write__").exists());
    }

    #[tokio::test]
    async fn test_ensure_writable_parent_bare_file_name() {
        ensure_writable_parent(Path::new("biotech_news.csv")).await.unwrap();
    }
}
