// Analysis pipeline: fetch -> clean -> count -> persist.
//
// This is the one workflow the service exists for. For each topic:
// 1. Resolves the topic and fetches the article extract from Wikipedia
// 2. Strips the HTML markup
// 3. Counts word frequencies and keeps the top n
// 4. Appends the result to the search history log
//
// A history row is written only after the full analysis succeeds, so
// failed lookups never reach the store.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::db::Database;
use crate::text::{clean, frequency};
use crate::wiki::{self, FetchError, WikiClient};

/// Why an analysis failed. Translated to an HTTP status only at the web
/// boundary.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The extract cleaned down to nothing.
    #[error("article text was empty after cleaning")]
    EmptyText,
    /// The analysis succeeded but the history row could not be written.
    #[error("failed to record search history: {0}")]
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for AnalyzeError {
    fn from(err: anyhow::Error) -> Self {
        AnalyzeError::Storage(err)
    }
}

/// Run the full analysis for one topic and return the top `n` words with
/// their counts.
pub async fn analyze_topic(
    wiki: &WikiClient,
    db: &Arc<dyn Database>,
    topic: &str,
    n: usize,
) -> Result<Vec<(String, u64)>, AnalyzeError> {
    let article = wiki::fetch_article(wiki, topic).await?;

    let plain = clean::strip_markup(&article.extract);
    if plain.trim().is_empty() {
        error!(
            topic = topic,
            page_id = %article.page_id,
            raw_extract = %article.extract,
            "Article text was empty after cleaning"
        );
        return Err(AnalyzeError::EmptyText);
    }

    let counts = frequency::top_words(&plain, n);
    let serialized = frequency::serialize_counts(&counts);
    db.record_search(topic, &serialized).await?;

    info!(
        topic = topic,
        title = %article.title,
        words = counts.len(),
        "Analysis recorded"
    );

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::create_tables;
    use crate::db::sqlite::SqliteDatabase;
    use rusqlite::Connection;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_db() -> Arc<dyn Database> {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        Arc::new(SqliteDatabase::new(conn))
    }

    async fn mock_article(server: &MockServer, topic: &str, page_id: &str, extract: &str) {
        Mock::given(method("GET"))
            .and(query_param("titles", topic))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { page_id: { "title": topic } } }
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(query_param("pageids", page_id))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { page_id: { "title": topic, "extract": extract } } }
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_successful_analysis_is_persisted() {
        let server = MockServer::start().await;
        mock_article(
            &server,
            "Cat",
            "6678",
            "<p>the cat sat on the mat the cat ran</p>",
        )
        .await;

        let wiki = WikiClient::new(&server.uri()).unwrap();
        let db = test_db();

        let counts = analyze_topic(&wiki, &db, "Cat", 3).await.unwrap();
        assert_eq!(counts[0], ("the".to_string(), 3));
        assert_eq!(counts[1], ("cat".to_string(), 2));

        let history = db.search_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].topic, "Cat");
        assert_eq!(history[0].top_words, "the: 3, cat: 2, sat: 1");
    }

    #[tokio::test]
    async fn test_empty_extract_fails_without_persisting() {
        let server = MockServer::start().await;
        mock_article(&server, "Blank", "99", "<div><img src=\"x.png\"/></div>").await;

        let wiki = WikiClient::new(&server.uri()).unwrap();
        let db = test_db();

        let err = analyze_topic(&wiki, &db, "Blank", 5).await.unwrap_err();
        assert!(matches!(err, AnalyzeError::EmptyText));
        assert!(db.search_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_history_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { "-1": { "title": "Nope", "missing": "" } } }
            })))
            .mount(&server)
            .await;

        let wiki = WikiClient::new(&server.uri()).unwrap();
        let db = test_db();

        let err = analyze_topic(&wiki, &db, "Nope", 5).await.unwrap_err();
        assert!(matches!(err, AnalyzeError::Fetch(FetchError::NotFound)));
        assert!(db.search_history().await.unwrap().is_empty());
    }
}
