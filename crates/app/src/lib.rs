//! `minibar-app`
//!
//! **Responsibility:** the thin shell a UI binds to.
//!
//! This crate provides:
//! - Configuration from the environment
//! - The explicit screen [`Mode`] selector
//! - [`InventorySession`]: store + persistence, saving after every mutation

pub mod config;
pub mod mode;
pub mod session;

pub use config::{AppConfig, StorageBackend};
pub use mode::Mode;
pub use session::InventorySession;

use minibar_infra::{InMemoryBlobStore, PersistenceBridge, PersistencePort, SqliteBlobStore};

/// Session over whichever backend the configuration selected.
pub type DynSession = InventorySession<Box<dyn PersistencePort>>;

/// Read configuration from the environment, start logging, open the session.
pub fn bootstrap() -> anyhow::Result<DynSession> {
    let config = AppConfig::from_env()?;
    Ok(bootstrap_with(&config))
}

/// Start logging and open the session for an explicit configuration.
pub fn bootstrap_with(config: &AppConfig) -> DynSession {
    minibar_observability::init(config.log_format);
    tracing::info!(storage = ?config.storage, data_dir = %config.data_dir.display(), "starting inventory session");
    open_session(config)
}

/// Open a session for `config`.
///
/// Never fails: if the database cannot be opened the session runs on an
/// in-memory store with the default catalog, and nothing is saved.
pub fn open_session(config: &AppConfig) -> DynSession {
    let persistence: Box<dyn PersistencePort> = match config.storage {
        StorageBackend::Memory => Box::new(PersistenceBridge::new(InMemoryBlobStore::new())),
        StorageBackend::Sqlite => match SqliteBlobStore::open(config.database_path()) {
            Ok(store) => Box::new(PersistenceBridge::new(store)),
            Err(err) => {
                tracing::error!(error = ?err, "failed to open inventory database; changes will not be saved");
                Box::new(PersistenceBridge::new(InMemoryBlobStore::new()))
            }
        },
    };
    InventorySession::open(persistence)
}
