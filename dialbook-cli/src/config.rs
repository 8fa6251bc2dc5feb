//! CLI Configuration

use std::path::PathBuf;

use dialbook_core::EngineConfig;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Data directory for storage.
    pub data_dir: PathBuf,
    /// JSON file holding the contact snapshot.
    pub contacts_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Returns the storage path for favorites and search history.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("dialbook.db")
    }
}
