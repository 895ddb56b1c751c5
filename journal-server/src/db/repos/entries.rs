//! PostgreSQL entry repository
//!
//! Every call owns a full connection lifecycle: open, execute, close.
//! The connection is closed before the result (or error) is returned.
//!
//! `created_at` is bound as text, so the column must be `TEXT` (see
//! `sql/schema.sql`); a native `timestamp` column rejects the insert.

use async_trait::async_trait;

use crate::db::connection::{release, ConnectionProvider};
use crate::db::EntryStore;
use crate::error::ServiceResult;
use crate::models::JournalEntry;

const INSERT_ENTRY: &str = "INSERT INTO journal_entries (entry, created_at) VALUES ($1, $2)";
const SELECT_ENTRIES: &str = "SELECT entry FROM journal_entries ORDER BY created_at DESC";

/// Entry repository backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgEntryRepo {
    provider: ConnectionProvider,
}

impl PgEntryRepo {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl EntryStore for PgEntryRepo {
    async fn append(&self, entry: &str, created_at: &str) -> ServiceResult<()> {
        let mut conn = self.provider.connect().await?;

        let result = sqlx::query(INSERT_ENTRY)
            .bind(entry)
            .bind(created_at)
            .execute(&mut conn)
            .await;

        release(conn).await;

        let done = result?;
        tracing::debug!(rows = done.rows_affected(), %created_at, "entry inserted");
        Ok(())
    }

    async fn list(&self) -> ServiceResult<Vec<JournalEntry>> {
        let mut conn = self.provider.connect().await?;

        let result = sqlx::query_scalar::<_, String>(SELECT_ENTRIES)
            .fetch_all(&mut conn)
            .await;

        release(conn).await;

        Ok(result?
            .into_iter()
            .map(|entry| JournalEntry { entry })
            .collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> ServiceResult<()> {
        let conn = self.provider.connect().await?;
        release(conn).await;
        Ok(())
    }
}
