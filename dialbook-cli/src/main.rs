//! Dialbook CLI
//!
//! Command-line front end for the Dialbook contact engine. Reads a JSON
//! contact snapshot and keeps favorites and search history in a local
//! database.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use dialbook_core::EngineConfig;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "dialbook")]
#[command(version, about = "Contact deduplication, sections and suggestions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with the contact snapshot
    #[arg(long, global = true, env = "DIALBOOK_CONTACTS")]
    contacts: Option<PathBuf>,

    /// Data directory (default: platform data dir + /dialbook)
    #[arg(long, global = true, env = "DIALBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Contact cache lifetime in seconds
    #[arg(long, global = true, env = "DIALBOOK_CACHE_TTL", default_value = "300")]
    cache_ttl: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// List contacts under favorite and alphabetic sections
    Sections,

    /// Find likely duplicate contacts
    Duplicates {
        /// Minimum similarity score (0.0 - 1.0)
        #[arg(long, default_value = "0.7")]
        threshold: f32,
    },

    /// Suggest contacts to call
    Suggest {
        /// Maximum number of suggestions (default: 5)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search contacts by name, phone or email
    Search {
        /// Search query
        query: String,
    },

    /// Format a dialed number and find its contact
    Lookup {
        /// Phone number as typed
        number: String,
    },

    /// Toggle a contact's favorite flag
    Favorite {
        /// Contact ID
        id: String,
    },

    /// Show recent searches
    History {
        /// Clear the history instead
        #[arg(long)]
        clear: bool,
    },

    /// Show a call log grouped by day
    Calls {
        /// JSON file with call records
        log: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dialbook=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Resolve data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dialbook")
    });

    let mut engine = EngineConfig::default().with_cache_ttl(Duration::from_secs(cli.cache_ttl));
    if let Commands::Duplicates { threshold } = &cli.command {
        engine = engine.with_duplicate_threshold(*threshold);
    }

    let config = CliConfig {
        data_dir,
        contacts_path: cli.contacts,
        format: cli.format,
        engine,
    };

    match cli.command {
        Commands::Sections => commands::contacts::sections(&config)?,
        Commands::Duplicates { .. } => commands::contacts::duplicates(&config)?,
        Commands::Suggest { limit } => {
            let limit = limit.unwrap_or(config.engine.suggestion_limit);
            commands::contacts::suggest(&config, limit)?;
        }
        Commands::Search { query } => commands::contacts::search(&config, &query)?,
        Commands::Lookup { number } => commands::contacts::lookup(&config, &number)?,
        Commands::Favorite { id } => commands::contacts::favorite(&config, &id)?,
        Commands::History { clear } => commands::history::run(&config, clear)?,
        Commands::Calls { log } => commands::calls::run(&config, &log)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "dialbook", &mut io::stdout());
        }
    }

    Ok(())
}
