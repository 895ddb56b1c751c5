//! Database layer - connection provider and entry repositories
//!
//! # Design Principles
//!
//! - One connection per operation, opened and closed inside it - no pool
//! - Connections are released on every exit path, including errors
//! - Parameterized statements only

pub mod connection;
pub mod repos;

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::JournalEntry;

pub use connection::ConnectionProvider;
pub use repos::{MemoryEntryRepo, PgEntryRepo};

/// Append-only storage for journal entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Persist one entry with its creation timestamp.
    async fn append(&self, entry: &str, created_at: &str) -> ServiceResult<()>;

    /// All entries, most recent `created_at` first.
    async fn list(&self) -> ServiceResult<Vec<JournalEntry>>;

    /// Short backend name reported by the health check
    fn backend(&self) -> &'static str;

    /// Confirm the store is reachable without touching any rows.
    async fn ping(&self) -> ServiceResult<()>;
}
