// Database schema — table creation.
//
// The history log is a single append-only table. There is no migration
// machinery: `create_tables` is idempotent and safe to call on every
// startup.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Every successful analysis request appends one row here.
        -- Duplicate topics are allowed; there is no uniqueness constraint.
        CREATE TABLE IF NOT EXISTS search_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            topic TEXT NOT NULL,
            top_words TEXT NOT NULL
        );
        ",
    )
    .context("Failed to create database tables")?;

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
