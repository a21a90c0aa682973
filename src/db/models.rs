// Data models — Rust structs that map to database rows.
//
// Separate from the queries so other modules can use them without
// depending on rusqlite directly.

use serde::{Deserialize, Serialize};

/// One persisted search: a topic and the serialized top-words result.
///
/// Rows are append-only. They are created once per successful analysis,
/// never updated, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    pub id: i64,
    pub topic: String,
    /// Comma-separated "word: count" pairs, e.g. "the: 3, cat: 2"
    pub top_words: String,
}
