use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Everything
/// has a default — the service runs against the real Wikipedia API out of
/// the box, and the database lands in the working directory.
pub struct Config {
    /// Path to the SQLite database file
    pub db_path: String,
    /// MediaWiki Action API endpoint (defaults to English Wikipedia).
    /// Point this at a local mock server for testing.
    pub wiki_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            db_path: env::var("WORDMILL_DB_PATH").unwrap_or_else(|_| "./wordmill.db".to_string()),
            wiki_api_url: env::var("WIKIPEDIA_API_URL")
                .unwrap_or_else(|_| crate::wiki::client::DEFAULT_API_URL.to_string()),
        })
    }
}
