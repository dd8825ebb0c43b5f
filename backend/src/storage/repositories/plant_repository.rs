use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::PlantState;
use sqlx::{sqlite::SqliteRow, Row};

use super::sql_limit;
use crate::domain::models::{format_timestamp, parse_timestamp, PlantRecord};
use crate::storage::connection::DbConnection;
use crate::storage::traits::PlantStorage;

/// Repository for plant operations
#[derive(Clone)]
pub struct PlantRepository {
    db: DbConnection,
}

impl PlantRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn plant_from_row(row: &SqliteRow) -> Result<PlantRecord> {
        let state: String = row.try_get("state")?;
        let created_at: String = row.try_get("created_at")?;

        Ok(PlantRecord {
            id: row.try_get("id")?,
            label: row.try_get("label")?,
            state: state.parse::<PlantState>().map_err(|e| anyhow!(e))?,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl PlantStorage for PlantRepository {
    async fn store_plant(&self, plant: &PlantRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO plants (id, label, state, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&plant.id)
        .bind(&plant.label)
        .bind(plant.state.as_str())
        .bind(format_timestamp(&plant.created_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_plant(&self, plant_id: &str) -> Result<Option<PlantRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, label, state, created_at
            FROM plants
            WHERE id = ?
            "#,
        )
        .bind(plant_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::plant_from_row).transpose()
    }

    async fn list_plants(&self, limit: Option<u32>) -> Result<Vec<PlantRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, label, state, created_at
            FROM plants
            ORDER BY created_at DESC, ROWID DESC
            LIMIT ?
            "#,
        )
        .bind(sql_limit(limit))
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::plant_from_row).collect()
    }

    async fn update_plant_state(&self, plant_id: &str, state: PlantState) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE plants
            SET state = ?
            WHERE id = ?
            "#,
        )
        .bind(state.as_str())
        .bind(plant_id)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn activate_plant_within_limit(&self, plant_id: &str, max_active: usize) -> Result<bool> {
        let max_active = i64::try_from(max_active)?;
        let result = sqlx::query(
            r#"
            UPDATE plants
            SET state = 'active'
            WHERE id = ?
              AND state != 'active'
              AND (SELECT COUNT(*) FROM plants WHERE state = 'active') < ?
            "#,
        )
        .bind(plant_id)
        .bind(max_active)
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
