use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;

use wordmill::config::Config;

/// Wordmill: Wikipedia word-frequency analysis service.
///
/// Fetches an article by topic, strips the markup, counts word
/// frequencies, and keeps a log of every successful query.
#[derive(Parser)]
#[command(name = "wordmill", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value = "3000")]
        port: u16,
    },

    /// Analyze a single topic from the terminal
    Analyze {
        /// The article title to analyze (e.g. "Rust (programming language)")
        topic: String,

        /// How many top words to report
        #[arg(long, default_value = "10")]
        n: usize,
    },

    /// Print the recorded search history
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordmill=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let config = Config::load()?;
            let db = wordmill::db::initialize(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nWordmill is ready. Start the server with: wordmill serve");
        }

        Commands::Serve { bind, port } => {
            let config = Config::load()?;
            let db = wordmill::db::open(&config.db_path)?;
            let wiki = Arc::new(wordmill::wiki::WikiClient::new(&config.wiki_api_url)?);
            wordmill::web::run_server(db, wiki, port, &bind).await?;
        }

        Commands::Analyze { topic, n } => {
            if n == 0 {
                anyhow::bail!("n must be a positive integer");
            }

            let config = Config::load()?;
            let db = wordmill::db::open(&config.db_path)?;
            let wiki = wordmill::wiki::WikiClient::new(&config.wiki_api_url)?;

            println!("Analyzing \"{topic}\"...");

            let counts = wordmill::pipeline::analyze_topic(&wiki, &db, &topic, n).await?;

            println!(
                "\n{}",
                format!("=== Top {} words for \"{topic}\" ===", counts.len()).bold()
            );
            for (i, (word, count)) in counts.iter().enumerate() {
                println!("  {:>3}. {:<24} {count}", i + 1, word);
            }
            println!("\n{}", "Saved to search history.".dimmed());
        }

        Commands::History => {
            let config = Config::load()?;
            let db = wordmill::db::open(&config.db_path)?;
            let records = db.search_history().await?;

            if records.is_empty() {
                println!("No searches recorded yet.");
                println!("Run `wordmill analyze <topic>` or query /word_frequency first.");
                return Ok(());
            }

            println!(
                "{}",
                format!("=== Search history ({} entries) ===", records.len()).bold()
            );
            for record in &records {
                println!("  {:>4}. {}", record.id, record.topic.bold());
                println!("        {}", record.top_words.dimmed());
            }
        }
    }

    Ok(())
}
