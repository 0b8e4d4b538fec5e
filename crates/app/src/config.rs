//! Application configuration, read from environment variables.
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `MINIBAR_STORAGE` | `sqlite`, `memory` | `sqlite` |
//! | `MINIBAR_DATA_DIR` | directory path | `{os data dir}/minibar` |
//! | `MINIBAR_LOG_FORMAT` | `json`, `pretty` | `json` |
//!
//! Log filtering itself is controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, bail};
use minibar_infra::SqliteBlobStore;
use minibar_observability::LogFormat;

pub const STORAGE_VAR: &str = "MINIBAR_STORAGE";
pub const DATA_DIR_VAR: &str = "MINIBAR_DATA_DIR";
pub const LOG_FORMAT_VAR: &str = "MINIBAR_LOG_FORMAT";

/// Where the inventory blob is kept.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Device-local SQLite database.
    #[default]
    Sqlite,
    /// Process memory only; nothing survives a restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub data_dir: PathBuf,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match lookup(STORAGE_VAR).as_deref().map(str::trim) {
            None | Some("") => StorageBackend::default(),
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "sqlite" => StorageBackend::Sqlite,
                "memory" => StorageBackend::Memory,
                other => bail!("{STORAGE_VAR} must be `sqlite` or `memory`, got `{other}`"),
            },
        };

        let data_dir = match lookup(DATA_DIR_VAR).filter(|dir| !dir.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => LogFormat::parse(&raw).with_context(|| {
                format!("{LOG_FORMAT_VAR} must be `json` or `pretty`, got `{raw}`")
            })?,
        };

        Ok(Self {
            storage,
            data_dir,
            log_format,
        })
    }

    /// Path of the SQLite database inside `data_dir`.
    pub fn database_path(&self) -> PathBuf {
        SqliteBlobStore::default_path(&self.data_dir)
    }
}

/// `{app_data_dir}/minibar`.
fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - set MINIBAR_DATA_DIR")?;

    Ok(base.join("minibar"))
}
