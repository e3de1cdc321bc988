//! Wikipedia infobox source.
//!
//! A subject is resolved in three steps over the MediaWiki action API:
//!
//! ```text
//! subject ── list=search (srlimit=1) ──▶ title
//!         ── action=parse (prop=text) ──▶ page HTML
//!         ── first `.infobox` element  ──▶ its text nodes, concatenated
//! ```
//!
//! Each request is a single blocking call with the configured timeout.

use super::DocumentSource;
use crate::SourceError;
use scraper::{Html, Selector};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`WikipediaSource`].
#[derive(Debug, Clone)]
pub struct WikipediaOptions {
    /// Action API endpoint, e.g. `https://en.wikipedia.org/w/api.php`.
    pub endpoint: String,
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for WikipediaOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: format!("factoid/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct WikipediaSource {
    agent: ureq::Agent,
    options: WikipediaOptions,
}

impl WikipediaSource {
    pub fn new(options: WikipediaOptions) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(options.timeout).user_agent(&options.user_agent).build();
        Self { agent, options }
    }

    pub fn options(&self) -> &WikipediaOptions {
        &self.options
    }

    /// Title of the best search hit for `subject`.
    fn search(&self, subject: &str) -> Result<String, SourceError> {
        let response: SearchResponse = self.get(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", subject),
            ("srlimit", "1"),
            ("format", "json"),
            ("formatversion", "2"),
        ])?;
        response.query.search.into_iter().next().map(|hit| hit.title).ok_or(SourceError::NoResults)
    }

    /// Rendered HTML of the page `title`, following redirects.
    fn page_html(&self, title: &str) -> Result<String, SourceError> {
        let response: ParseResponse = self.get(&[
            ("action", "parse"),
            ("page", title),
            ("prop", "text"),
            ("redirects", "1"),
            ("format", "json"),
            ("formatversion", "2"),
        ])?;
        response.parse.map(|page| page.text).ok_or(SourceError::NoResults)
    }

    fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, SourceError> {
        let request = params.iter().fold(self.agent.get(&self.options.endpoint), |req, (k, v)| req.query(k, v));
        let response = request.call().map_err(|err| SourceError::Transport(err.to_string()))?;
        response.into_json().map_err(|err| SourceError::Decode(err.to_string()))
    }
}

impl Default for WikipediaSource {
    fn default() -> Self {
        Self::new(WikipediaOptions::default())
    }
}

impl std::fmt::Debug for WikipediaSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikipediaSource").field("options", &self.options).finish()
    }
}

impl DocumentSource for WikipediaSource {
    fn resolve_document(&self, subject: &str) -> Result<String, SourceError> {
        let title = self.search(subject)?;
        debug!(subject, title = %title, "search hit");
        let html = self.page_html(&title)?;
        debug!(title = %title, bytes = html.len(), "fetched page");
        infobox_text(&html)
    }
}

/// Text of the first element with class `infobox` in `html`.
///
/// All text nodes are concatenated as-is, so the result keeps the table's
/// line breaks and non-breaking spaces; run it through `normalize` before
/// extracting fields.
pub fn infobox_text(html: &str) -> Result<String, SourceError> {
    let selector = Selector::parse(".infobox").map_err(|err| SourceError::Decode(format!("{err:?}")))?;
    let document = Html::parse_document(html);
    let infobox = document.select(&selector).next().ok_or(SourceError::NoInfobox)?;
    Ok(infobox.text().collect())
}

// --- API payloads -----------------------------------------------------------

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: SearchQuery,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: String,
}
