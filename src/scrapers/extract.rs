//! Field extraction for a single search result listing.
//!
//! Result page markup is undocumented and changes often, so every field is
//! looked up through a [`SelectorChain`]: an ordered list of CSS selectors
//! where the first one whose first match carries non-empty text wins.
//!
//! | Field | Candidates | When nothing matches |
//! |-------|------------|----------------------|
//! | title | `h3`, `h4`, `a.DY5T1d` | `None` ("No title") |
//! | link | `href` of the first `a` | `None` |
//! | source | `div.vr1PYe`, `span.vr1PYe` | `None` ("Unknown source") |
//! | timestamp | `time`, `div.OSrXXb` | `None` ("Unknown time") |
//! | snippet | `div.GI74Re`, `span.xBjOHf` | `""` |

use crate::errors::ExtractionError;
use crate::models::ArticleRecord;
use chrono::Local;
use scraper::{ElementRef, Selector};
use tracing::trace;
use url::Url;

const TITLE_SELECTORS: &[&str] = &["h3", "h4", "a.DY5T1d"];
const LINK_SELECTORS: &[&str] = &["a"];
const SOURCE_SELECTORS: &[&str] = &["div.vr1PYe", "span.vr1PYe"];
const TIMESTAMP_SELECTORS: &[&str] = &["time", "div.OSrXXb"];
const SNIPPET_SELECTORS: &[&str] = &["div.GI74Re", "span.xBjOHf"];

/// Links starting with this marker are relative to the search site.
const RELATIVE_LINK_MARKER: &str = "./";

/// Compile a CSS selector, keeping the offending text in the error.
pub(crate) fn compile(selector: &str) -> Result<Selector, ExtractionError> {
    Selector::parse(selector).map_err(|e| ExtractionError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Whitespace-stripped text content: every text fragment trimmed, blank
/// fragments dropped, the rest concatenated.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Ordered fallback lookup for one field.
#[derive(Debug)]
pub struct SelectorChain {
    selectors: Vec<Selector>,
}

impl SelectorChain {
    pub fn new(candidates: &[&str]) -> Result<Self, ExtractionError> {
        let selectors = candidates
            .iter()
            .map(|c| compile(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { selectors })
    }

    /// First element of each candidate, in candidate order.
    fn first_matches<'a>(&'a self, node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
        self.selectors
            .iter()
            .filter_map(move |selector| node.select(selector).next())
    }

    /// Text of the first candidate whose first match is not blank.
    pub fn first_text(&self, node: ElementRef<'_>) -> Option<String> {
        self.first_matches(node)
            .map(stripped_text)
            .find(|text| !text.is_empty())
    }

    /// Attribute value of the first candidate that matches at all.
    pub fn first_attr(&self, node: ElementRef<'_>, attr: &str) -> Option<String> {
        self.first_matches(node)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }
}

/// Turns candidate result nodes into [`ArticleRecord`]s.
#[derive(Debug)]
pub struct FieldExtractor {
    base_url: Url,
    title: SelectorChain,
    link: SelectorChain,
    source: SelectorChain,
    timestamp: SelectorChain,
    snippet: SelectorChain,
}

impl FieldExtractor {
    /// Build an extractor whose relative links resolve against `base_url`.
    pub fn new(base_url: Url) -> Result<Self, ExtractionError> {
        Ok(Self {
            base_url,
            title: SelectorChain::new(TITLE_SELECTORS)?,
            link: SelectorChain::new(LINK_SELECTORS)?,
            source: SelectorChain::new(SOURCE_SELECTORS)?,
            timestamp: SelectorChain::new(TIMESTAMP_SELECTORS)?,
            snippet: SelectorChain::new(SNIPPET_SELECTORS)?,
        })
    }

    /// Extract one record from a candidate node.
    ///
    /// Missing fields never fail: they come back as `None` (or an empty
    /// snippet). An error means the node could not be read and should be
    /// skipped.
    pub fn extract(&self, node: ElementRef<'_>) -> Result<ArticleRecord, ExtractionError> {
        let link = match self.link.first_attr(node, "href") {
            Some(href) => Some(self.resolve_link(href)?),
            None => None,
        };

        let record = ArticleRecord {
            title: self.title.first_text(node),
            link,
            source: self.source.first_text(node),
            timestamp: self.timestamp.first_text(node),
            snippet: self.snippet.first_text(node).unwrap_or_default(),
            search_keyword: String::new(),
            collected_at: Local::now(),
        };
        trace!(title = %record.title(), "Extracted record");
        Ok(record)
    }

    fn resolve_link(&self, href: String) -> Result<String, ExtractionError> {
        if !href.starts_with(RELATIVE_LINK_MARKER) {
            return Ok(href);
        }
        self.base_url
            .join(&href)
            .map(String::from)
            .map_err(|source| ExtractionError::LinkJoin {
                base: self.base_url.to_string(),
                href,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new(Url::parse("https://news.example.com").unwrap()).unwrap()
    }

    fn extract_from(html: &str) -> Result<ArticleRecord, ExtractionError> {
        let document = Html::parse_fragment(html);
        let article = compile("article").unwrap();
        let node = document.select(&article).next().unwrap();
        extractor().extract(node)
    }

    #[test]
    fn test_full_listing() {
        let record = extract_from(
            r#"<article>
                <h3><a href="./articles/abc">  Moderna wins FDA approval </a></h3>
                <div class="vr1PYe">STAT News</div>
                <time datetime="2025-05-06T10:00:00Z">3 hours ago</time>
                <div class="GI74Re">The agency cleared the mRNA shot.</div>
            </article>"#,
        )
        .unwrap();

        assert_eq!(record.title.as_deref(), Some("Moderna wins FDA approval"));
        assert_eq!(
            record.link.as_deref(),
            Some("https://news.example.com/articles/abc")
        );
        assert_eq!(record.source.as_deref(), Some("STAT News"));
        assert_eq!(record.timestamp.as_deref(), Some("3 hours ago"));
        assert_eq!(record.snippet, "The agency cleared the mRNA shot.");
        assert_eq!(record.search_keyword, "");
    }

    #[test]
    fn test_unrecognizable_node_yields_placeholders() {
        let record = extract_from("<article><p>nothing useful</p></article>").unwrap();
        assert_eq!(record.title, None);
        assert_eq!(record.title(), "No title");
        assert_eq!(record.link, None);
        assert_eq!(record.source(), "Unknown source");
        assert_eq!(record.timestamp(), "Unknown time");
        assert_eq!(record.snippet, "");
    }

    #[test]
    fn test_title_falls_back_past_blank_heading() {
        let record = extract_from(
            r#"<article><h3>   </h3><h4>Biosimilar launch delayed</h4></article>"#,
        )
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("Biosimilar launch delayed"));
    }

    #[test]
    fn test_title_from_classed_link() {
        let record = extract_from(
            r#"<article><a class="DY5T1d" href="https://x.example/a">Stem cell study</a></article>"#,
        )
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("Stem cell study"));
        assert_eq!(record.link.as_deref(), Some("https://x.example/a"));
    }

    #[test]
    fn test_source_from_span_and_timestamp_from_div() {
        let record = extract_from(
            r#"<article>
                <span class="vr1PYe">Fierce Biotech</span>
                <div class="OSrXXb">Yesterday</div>
                <span class="xBjOHf">Antibody deal</span>
            </article>"#,
        )
        .unwrap();
        assert_eq!(record.source.as_deref(), Some("Fierce Biotech"));
        assert_eq!(record.timestamp.as_deref(), Some("Yesterday"));
        assert_eq!(record.snippet, "Antibody deal");
    }

    #[test]
    fn test_text_fragments_are_stripped_and_joined() {
        let record =
            extract_from("<article><h3> Gene <b> therapy </b> news </h3></article>").unwrap();
        assert_eq!(record.title.as_deref(), Some("Genetherapynews"));
    }

    #[test]
    fn test_absolute_and_other_relative_links_untouched() {
        let absolute =
            extract_from(r#"<article><a href="https://other.example/story">x</a></article>"#)
                .unwrap();
        assert_eq!(absolute.link.as_deref(), Some("https://other.example/story"));

        let rooted = extract_from(r#"<article><a href="/story">x</a></article>"#).unwrap();
        assert_eq!(rooted.link.as_deref(), Some("/story"));
    }

    #[test]
    fn test_anchor_without_href_has_no_link() {
        let record = extract_from(r#"<article><a name="top">x</a></article>"#).unwrap();
        assert_eq!(record.link, None);
    }

    #[test]
    fn test_unjoinable_link_is_an_error() {
        let extractor = FieldExtractor::new(Url::parse("data:text/plain,hello").unwrap()).unwrap();
        let document = Html::parse_fragment(r#"<article><a href="./articles/abc">x</a></article>"#);
        let article = compile("article").unwrap();
        let node = document.select(&article).next().unwrap();

        let err = extractor.extract(node).unwrap_err();
        assert!(matches!(err, ExtractionError::LinkJoin { .. }));
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let err = SelectorChain::new(&["h3", "div[["]).unwrap_err();
        assert!(matches!(err, ExtractionError::Selector { ref selector, .. } if selector == "div[["));
    }
}
