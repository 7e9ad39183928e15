//! Storage module for the record store, its backends and configuration.

pub mod backend;
pub mod config;
pub mod database;
pub mod record_store;
pub mod schema;
pub mod seed;

pub use backend::{DetachedBackend, MemoryBackend, StorageBackend, StoreError};
pub use config::{AppConfig, BackendKind, ConfigError, LoggingSettings, StorageSettings};
pub use database::{Database, DatabaseError};
pub use record_store::{RecordStore, MEMBERS_KEY, REVIEWS_KEY, TRAINERS_KEY};
pub use seed::SeedMode;

/// Open the backend selected in `config` and wrap it in a record store.
pub fn open_store(
    config: &AppConfig,
) -> Result<RecordStore<Box<dyn StorageBackend>>, DatabaseError> {
    let backend: Box<dyn StorageBackend> = match config.storage.backend {
        BackendKind::Sqlite => Box::new(Database::open(&config.database_path())?),
        BackendKind::Memory => Box::new(MemoryBackend::new()),
    };

    tracing::info!(
        "Opened {} storage (seed mode: {})",
        config.storage.backend,
        config.storage.seed_mode
    );

    Ok(RecordStore::with_seed_mode(backend, config.storage.seed_mode))
}
