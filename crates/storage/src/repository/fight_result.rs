use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::results::RecordResultRequest;
use crate::error::{Result, StorageError};
use crate::models::FightResult;

pub struct FightResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FightResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Result of a fight, or `None` while it is undecided
    pub async fn find_by_fight(&self, fight_id: Uuid) -> Result<Option<FightResult>> {
        let result = sqlx::query_as::<_, FightResult>(
            r#"
            SELECT result_id, fight_id, winner_id, method, round, time
            FROM fight_results
            WHERE fight_id = $1
            "#,
        )
        .bind(fight_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    /// Insert the result of a fight. Results are write-once.
    pub async fn create(&self, req: &RecordResultRequest) -> Result<FightResult> {
        let result = sqlx::query_as::<_, FightResult>(
            r#"
            INSERT INTO fight_results (fight_id, winner_id, method, round, time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING result_id, fight_id, winner_id, method, round, time
            "#,
        )
        .bind(req.fight_id)
        .bind(req.winner_id)
        .bind(req.method)
        .bind(req.round)
        .bind(req.time.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                return StorageError::ConstraintViolation(
                    "Result already exists for this fight".to_string(),
                );
            }
            err
        })?;

        Ok(result)
    }
}
