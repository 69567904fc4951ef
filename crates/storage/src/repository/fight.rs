use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Fight;

/// Repository for Fight database operations
pub struct FightRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FightRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the fights on an event's card, in bout order
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Fight>> {
        let fights = sqlx::query_as::<_, Fight>(
            r#"
            SELECT fight_id, event_id, weight_class, fighter1_id, fighter2_id,
                   is_main_event, bout_order
            FROM fights
            WHERE event_id = $1
            ORDER BY bout_order, fight_id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(fights)
    }

    /// Get a fight by ID
    pub async fn find_by_id(&self, fight_id: Uuid) -> Result<Fight> {
        let fight = sqlx::query_as::<_, Fight>(
            r#"
            SELECT fight_id, event_id, weight_class, fighter1_id, fighter2_id,
                   is_main_event, bout_order
            FROM fights
            WHERE fight_id = $1
            "#,
        )
        .bind(fight_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(fight)
    }
}
