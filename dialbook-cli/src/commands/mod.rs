//! CLI Commands

pub mod calls;
pub mod contacts;
pub mod history;

use anyhow::{bail, Context, Result};
use dialbook_core::{ContactRepository, JsonFileSource, Storage};
use tracing::debug;

use crate::config::CliConfig;

pub type Repository = ContactRepository<JsonFileSource, Storage>;

/// Opens the repository over the configured snapshot file and local store.
pub fn open_repository(config: &CliConfig) -> Result<Repository> {
    let Some(contacts_path) = config.contacts_path.as_ref() else {
        bail!("No contact snapshot given. Pass --contacts <file.json>.");
    };

    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "Failed to create data directory {}",
            config.data_dir.display()
        )
    })?;

    let storage_path = config.storage_path();
    debug!(path = %storage_path.display(), "opening local store");
    let storage = Storage::open(&storage_path)?;

    Ok(ContactRepository::new(
        JsonFileSource::new(contacts_path),
        storage,
        config.engine.clone(),
    ))
}
