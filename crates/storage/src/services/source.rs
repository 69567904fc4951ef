use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Fight, FightResult, PickSubmission, User};
use crate::repository::{
    fight::FightRepository, fight_result::FightResultRepository,
    pick_submission::PickSubmissionRepository, user::UserRepository,
};

/// Read access the scoring engine needs from the persistence layer.
#[async_trait]
pub trait ScoringSource: Send + Sync {
    async fn get_submission(&self, user_id: Uuid, event_id: Uuid)
    -> Result<Option<PickSubmission>>;

    async fn get_fights(&self, event_id: Uuid) -> Result<Vec<Fight>>;

    async fn get_result(&self, fight_id: Uuid) -> Result<Option<FightResult>>;

    /// All submissions for an event in encounter order (first submitted first)
    async fn get_all_submissions(&self, event_id: Uuid) -> Result<Vec<PickSubmission>>;

    async fn get_user(&self, user_id: Uuid) -> Result<User>;
}

/// `ScoringSource` backed by Postgres
pub struct PgScoringSource<'a> {
    pool: &'a PgPool,
}

impl<'a> PgScoringSource<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoringSource for PgScoringSource<'_> {
    async fn get_submission(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<PickSubmission>> {
        PickSubmissionRepository::new(self.pool)
            .find(user_id, event_id)
            .await
    }

    async fn get_fights(&self, event_id: Uuid) -> Result<Vec<Fight>> {
        FightRepository::new(self.pool).list_by_event(event_id).await
    }

    async fn get_result(&self, fight_id: Uuid) -> Result<Option<FightResult>> {
        FightResultRepository::new(self.pool)
            .find_by_fight(fight_id)
            .await
    }

    async fn get_all_submissions(&self, event_id: Uuid) -> Result<Vec<PickSubmission>> {
        PickSubmissionRepository::new(self.pool)
            .list_by_event(event_id)
            .await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User> {
        UserRepository::new(self.pool).find_by_id(user_id).await
    }
}
