// Database trait — the storage interface handlers are written against.
//
// Implementor: SqliteDatabase (wraps rusqlite behind a tokio Mutex).
// The methods are async so the web handlers never care that the backend
// itself is synchronous.
//
// The history log is append-only: there are intentionally no update or
// delete methods.

use anyhow::Result;
use async_trait::async_trait;

use super::models::SearchRecord;

#[async_trait]
pub trait Database: Send + Sync {
    /// Count the number of user-created tables (init confirmation).
    async fn table_count(&self) -> Result<i64>;

    /// Append one search to the history log and return its row id.
    async fn record_search(&self, topic: &str, top_words: &str) -> Result<i64>;

    /// Load every history row in insertion order.
    async fn search_history(&self) -> Result<Vec<SearchRecord>>;
}
