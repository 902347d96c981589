//! The article record produced by the extraction pipeline.
//!
//! Missing text fields are kept as `None` in memory. The placeholder strings
//! (`"No title"`, `"Unknown source"`, `"Unknown time"`) only exist at the
//! serialization boundary: they are written in place of `None` and mapped
//! back to `None` when a file is read again. A missing snippet is the empty
//! string and a missing link is `null` in JSON and an empty cell in CSV.
//!
//! The mapping is lossy for scraped text that happens to equal a
//! placeholder: a headline that really reads "No title" is read back as
//! `None`. The serialized values are unchanged by a round trip.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Written when no title candidate produced any text.
pub const NO_TITLE: &str = "No title";
/// Written when no source candidate produced any text.
pub const UNKNOWN_SOURCE: &str = "Unknown source";
/// Written when no timestamp candidate produced any text.
pub const UNKNOWN_TIME: &str = "Unknown time";

/// Generates a `#[serde(with = ...)]` module that renders `None` as the
/// given placeholder and reads the placeholder back as `None`.
macro_rules! placeholder_text {
    ($module:ident, $placeholder:path) => {
        mod $module {
            use serde::{Deserialize, Deserializer, Serializer};

            pub fn serialize<S: Serializer>(
                value: &Option<String>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(value.as_deref().unwrap_or($placeholder))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<String>, D::Error> {
                let text = String::deserialize(deserializer)?;
                Ok((text != $placeholder).then_some(text))
            }
        }
    };
}

placeholder_text!(title_text, super::NO_TITLE);
placeholder_text!(source_text, super::UNKNOWN_SOURCE);
placeholder_text!(timestamp_text, super::UNKNOWN_TIME);

/// One article listing pulled out of a search result page.
///
/// Field order is the column order of the CSV output.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// Headline text; also the deduplication key.
    #[serde(with = "title_text")]
    pub title: Option<String>,
    /// Article URL, absolute when the page used a `./` relative path.
    pub link: Option<String>,
    /// Publisher name as shown on the result page.
    #[serde(with = "source_text")]
    pub source: Option<String>,
    /// Publication time exactly as displayed (e.g. "2 hours ago").
    #[serde(with = "timestamp_text")]
    pub timestamp: Option<String>,
    /// Teaser text; empty when the listing had none.
    pub snippet: String,
    /// Keyword whose search first produced this record.
    pub search_keyword: String,
    /// When the record was extracted.
    pub collected_at: DateTime<Local>,
}

impl ArticleRecord {
    /// Headline used for display and deduplication, falling back to
    /// [`NO_TITLE`].
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(NO_TITLE)
    }

    /// Publisher name for display, falling back to [`UNKNOWN_SOURCE`].
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(UNKNOWN_SOURCE)
    }

    /// Publication time for display, falling back to [`UNKNOWN_TIME`].
    pub fn timestamp(&self) -> &str {
        self.timestamp.as_deref().unwrap_or(UNKNOWN_TIME)
    }

    /// Attach the keyword that produced this record.
    pub fn tagged(self, keyword: &str) -> Self {
        Self {
            search_keyword: keyword.to_string(),
            ..self
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_record(title: &str) -> ArticleRecord {
    ArticleRecord {
        title: Some(title.to_string()),
        link: Some("https://news.example.com/articles/abc".to_string()),
        source: Some("Endpoints News".to_string()),
        timestamp: Some("2 hours ago".to_string()),
        snippet: "Phase 3 readout beats expectations".to_string(),
        search_keyword: String::new(),
        collected_at: Local::now(),
    }
}
