// Database queries — the two operations the history log supports.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust
// interfaces.

use anyhow::Result;
use rusqlite::{params, Connection};

use super::models::SearchRecord;

/// Append a search to the history log and return its row id.
///
/// There is deliberately no upsert here: repeating a topic produces a new
/// row each time.
pub fn insert_search(conn: &Connection, topic: &str, top_words: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO search_history (topic, top_words) VALUES (?1, ?2)",
        params![topic, top_words],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load every history row in insertion order.
pub fn list_searches(conn: &Connection) -> Result<Vec<SearchRecord>> {
    let mut stmt =
        conn.prepare("SELECT id, topic, top_words FROM search_history ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(SearchRecord {
            id: row.get(0)?,
            topic: row.get(1)?,
            top_words: row.get(2)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}
