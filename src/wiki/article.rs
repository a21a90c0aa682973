// Article fetching — the two-step topic -> page id -> extract flow.
//
// The Action API has no single "give me the text for this title" call, so
// every analysis costs two sequential round-trips: a title lookup that
// resolves the page id, then an extract fetch keyed by that id. There are
// no retries; a failed step fails the whole fetch.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::client::WikiClient;

/// Why a fetch failed. Translated to an HTTP status only at the web
/// boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, non-2xx status, or a body that didn't parse.
    #[error("Wikipedia request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The lookup found no page for the topic.
    #[error("no Wikipedia article matches the topic")]
    NotFound,
    /// The extract response carried no page title.
    #[error("article details missing from the Wikipedia response")]
    MissingTitle,
}

/// A fetched article: resolved page id, canonical title, raw extract.
#[derive(Debug, Clone)]
pub struct Article {
    pub page_id: String,
    pub title: String,
    /// Extract HTML as returned by the API; may be empty.
    pub extract: String,
}

// -- Serde types for the Action API query envelope --
//
// `pages` is keyed by page id, so it deserializes as a map. A lookup for
// a single title always yields a single entry; nonexistent pages come
// back under the sentinel key "-1" with a `missing` marker.

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: HashMap<String, PageEntry>,
}

#[derive(Deserialize, Default)]
struct PageEntry {
    title: Option<String>,
    extract: Option<String>,
    missing: Option<serde_json::Value>,
}

/// Fetch the article for a topic: resolve its page id, then pull the
/// extract.
pub async fn fetch_article(client: &WikiClient, topic: &str) -> Result<Article, FetchError> {
    // Step 1: resolve the topic to a page id.
    let lookup: QueryResponse = client.query(&[("titles", topic)]).await?;
    let pages = lookup.query.ok_or(FetchError::NotFound)?.pages;
    let (page_id, entry) = pages.into_iter().next().ok_or(FetchError::NotFound)?;

    if page_id == "-1" || entry.missing.is_some() {
        return Err(FetchError::NotFound);
    }

    debug!(topic = topic, page_id = %page_id, "Resolved topic to page id");

    // Step 2: fetch the extract for that page id.
    let full: QueryResponse = client
        .query(&[("pageids", &page_id), ("prop", "extracts")])
        .await?;
    let mut pages = full.query.ok_or(FetchError::NotFound)?.pages;
    let entry = pages.remove(&page_id).ok_or(FetchError::MissingTitle)?;
    let title = entry.title.ok_or(FetchError::MissingTitle)?;

    Ok(Article {
        page_id,
        title,
        extract: entry.extract.unwrap_or_default(),
    })
}
