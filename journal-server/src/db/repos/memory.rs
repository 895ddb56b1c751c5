//! In-memory entry repository
//!
//! Same ordering contract as PostgreSQL: newest `created_at` first. Ties go
//! to the later append.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::EntryStore;
use crate::error::ServiceResult;
use crate::models::JournalEntry;

#[derive(Debug, Clone)]
struct StoredEntry {
    entry: String,
    created_at: String,
}

/// Process-local entry repository
#[derive(Debug, Default)]
pub struct MemoryEntryRepo {
    rows: RwLock<Vec<StoredEntry>>,
}

impl MemoryEntryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryRepo {
    async fn append(&self, entry: &str, created_at: &str) -> ServiceResult<()> {
        self.rows.write().await.push(StoredEntry {
            entry: entry.to_string(),
            created_at: created_at.to_string(),
        });
        Ok(())
    }

    async fn list(&self) -> ServiceResult<Vec<JournalEntry>> {
        let rows = self.rows.read().await;
        let mut newest_first: Vec<&StoredEntry> = rows.iter().rev().collect();
        // Stable sort keeps later appends ahead on equal timestamps
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(newest_first
            .into_iter()
            .map(|row| JournalEntry {
                entry: row.entry.clone(),
            })
            .collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> ServiceResult<()> {
        Ok(())
    }
}
