use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Pick, PickSubmission};

#[derive(FromRow)]
struct SubmissionRow {
    submission_id: Uuid,
    user_id: Uuid,
    event_id: Uuid,
    picks: Json<Vec<Pick>>,
    submitted_at: DateTime<Utc>,
}

impl From<SubmissionRow> for PickSubmission {
    fn from(row: SubmissionRow) -> Self {
        Self {
            submission_id: row.submission_id,
            user_id: row.user_id,
            event_id: row.event_id,
            picks: row.picks.0,
            submitted_at: row.submitted_at,
        }
    }
}

/// Repository for per-user, per-event pick submissions
pub struct PickSubmissionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PickSubmissionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// The user's submission for an event, if any
    pub async fn find(&self, user_id: Uuid, event_id: Uuid) -> Result<Option<PickSubmission>> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT submission_id, user_id, event_id, picks, submitted_at
            FROM pick_submissions
            WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(PickSubmission::from))
    }

    /// Every submission for an event, oldest first.
    ///
    /// Ordering is by first submission, so replacing picks does not move a
    /// user within the list.
    pub async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<PickSubmission>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT submission_id, user_id, event_id, picks, submitted_at
            FROM pick_submissions
            WHERE event_id = $1
            ORDER BY created_at, submission_id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(PickSubmission::from).collect())
    }

    /// Create the user's submission or replace its picks wholesale.
    ///
    /// `created_at` is only set on first insert.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        picks: &[Pick],
        submitted_at: DateTime<Utc>,
    ) -> Result<PickSubmission> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            INSERT INTO pick_submissions (user_id, event_id, picks, created_at, submitted_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT (user_id, event_id)
            DO UPDATE SET picks = EXCLUDED.picks, submitted_at = EXCLUDED.submitted_at
            RETURNING submission_id, user_id, event_id, picks, submitted_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(Json(picks))
        .bind(submitted_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            // Unknown user
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                return StorageError::NotFound;
            }
            err
        })?;

        Ok(row.into())
    }
}
