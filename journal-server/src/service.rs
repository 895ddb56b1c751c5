//! Entry service - append and list operations
//!
//! The service stamps entries with the current UTC time; neither the client
//! nor the database supplies `created_at`.

use std::sync::Arc;

use crate::config::StoreBackend;
use crate::db::{ConnectionProvider, EntryStore, MemoryEntryRepo, PgEntryRepo};
use crate::error::{ConnectionError, ServiceResult};
use crate::models::{timestamp_now, EntryAdded, JournalEntry};

/// Journal operations over an [`EntryStore`]
#[derive(Clone)]
pub struct EntryService {
    store: Arc<dyn EntryStore>,
}

impl EntryService {
    pub fn new(store: Arc<dyn EntryStore>) -> Self {
        Self { store }
    }

    /// Build the service for a configured backend.
    pub fn from_backend(backend: &StoreBackend) -> Result<Self, ConnectionError> {
        let store: Arc<dyn EntryStore> = match backend {
            StoreBackend::Postgres {
                database_url,
                ssl_mode,
            } => Arc::new(PgEntryRepo::new(ConnectionProvider::new(
                database_url,
                *ssl_mode,
            )?)),
            StoreBackend::Memory => {
                tracing::warn!("using in-memory entry store - entries are lost on shutdown");
                Arc::new(MemoryEntryRepo::new())
            }
        };
        Ok(Self::new(store))
    }

    /// Append an entry, returning the confirmation with its timestamp.
    pub async fn add_entry(&self, entry: &str) -> ServiceResult<EntryAdded> {
        let timestamp = timestamp_now();
        self.store.append(entry, &timestamp).await?;
        tracing::info!(%timestamp, len = entry.len(), "entry added");
        Ok(EntryAdded::new(timestamp))
    }

    /// Backend name and reachability of the underlying store.
    pub async fn check_store(&self) -> (&'static str, ServiceResult<()>) {
        (self.store.backend(), self.store.ping().await)
    }

    /// All entries, newest first.
    pub async fn get_entries(&self) -> ServiceResult<Vec<JournalEntry>> {
        let entries = self.store.list().await?;
        tracing::debug!(count = entries.len(), "entries listed");
        Ok(entries)
    }
}
