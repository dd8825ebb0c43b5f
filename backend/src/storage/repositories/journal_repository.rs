use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use super::sql_limit;
use crate::domain::models::{format_timestamp, parse_timestamp, JournalRecord};
use crate::storage::connection::DbConnection;
use crate::storage::traits::JournalStorage;

/// Repository for journal entry operations
#[derive(Clone)]
pub struct JournalRepository {
    db: DbConnection,
}

impl JournalRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn journal_from_row(row: &SqliteRow) -> Result<JournalRecord> {
        let created_at: String = row.try_get("created_at")?;
        Ok(JournalRecord {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl JournalStorage for JournalRepository {
    async fn store_journal(&self, journal: &JournalRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO journals (id, content, created_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&journal.id)
        .bind(&journal.content)
        .bind(format_timestamp(&journal.created_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_journal(&self, journal_id: &str) -> Result<Option<JournalRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, content, created_at
            FROM journals
            WHERE id = ?
            "#,
        )
        .bind(journal_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::journal_from_row).transpose()
    }

    async fn list_journals(&self, limit: Option<u32>) -> Result<Vec<JournalRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, content, created_at
            FROM journals
            ORDER BY created_at DESC, ROWID DESC
            LIMIT ?
            "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::journal_from_row).collect()
    }
}
