//! In-memory `ScoringSource` for exercising the scoring engine in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Fight, FightResult, FinishMethod, Pick, PickSubmission, User};

use super::source::ScoringSource;

pub fn pick(fight_id: Uuid, fighter_id: Uuid, method: FinishMethod) -> Pick {
    Pick {
        fight_id,
        fighter_id,
        method,
    }
}

#[derive(Default)]
pub struct MemorySource {
    fights: Vec<Fight>,
    results: HashMap<Uuid, FightResult>,
    submissions: Vec<PickSubmission>,
    users: HashMap<Uuid, User>,
    failing: bool,
}

impl MemorySource {
    pub fn add_event(&mut self) -> Uuid {
        Uuid::new_v4()
    }

    pub fn add_fight(&mut self, event_id: Uuid, fighter1_id: Uuid, fighter2_id: Uuid) -> Uuid {
        let fight_id = Uuid::new_v4();
        self.fights.push(Fight {
            fight_id,
            event_id,
            weight_class: "Lightweight".to_string(),
            fighter1_id,
            fighter2_id,
            is_main_event: false,
            bout_order: self.fights.len() as i32 + 1,
        });
        fight_id
    }

    pub fn add_result(&mut self, fight_id: Uuid, winner_id: Uuid, method: FinishMethod) {
        self.results.insert(
            fight_id,
            FightResult {
                result_id: Uuid::new_v4(),
                fight_id,
                winner_id,
                method,
                round: None,
                time: None,
            },
        );
    }

    pub fn add_user(&mut self, username: &str) -> Uuid {
        let user_id = Uuid::new_v4();
        self.users.insert(
            user_id,
            User {
                user_id,
                username: username.to_string(),
            },
        );
        user_id
    }

    /// Store picks, replacing an earlier submission in place
    pub fn submit(&mut self, user_id: Uuid, event_id: Uuid, picks: Vec<Pick>) {
        if let Some(existing) = self
            .submissions
            .iter_mut()
            .find(|s| s.user_id == user_id && s.event_id == event_id)
        {
            existing.picks = picks;
            existing.submitted_at = Utc::now();
            return;
        }

        self.submissions.push(PickSubmission {
            submission_id: Uuid::new_v4(),
            user_id,
            event_id,
            picks,
            submitted_at: Utc::now(),
        });
    }

    /// Make every subsequent read fail as if the database were unreachable
    pub fn fail_reads(&mut self) {
        self.failing = true;
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(StorageError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ScoringSource for MemorySource {
    async fn get_submission(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<Option<PickSubmission>> {
        self.check()?;
        Ok(self
            .submissions
            .iter()
            .find(|s| s.user_id == user_id && s.event_id == event_id)
            .cloned())
    }

    async fn get_fights(&self, event_id: Uuid) -> Result<Vec<Fight>> {
        self.check()?;
        Ok(self
            .fights
            .iter()
            .filter(|f| f.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn get_result(&self, fight_id: Uuid) -> Result<Option<FightResult>> {
        self.check()?;
        Ok(self.results.get(&fight_id).cloned())
    }

    async fn get_all_submissions(&self, event_id: Uuid) -> Result<Vec<PickSubmission>> {
        self.check()?;
        Ok(self
            .submissions
            .iter()
            .filter(|s| s.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn get_user(&self, user_id: Uuid) -> Result<User> {
        self.check()?;
        self.users.get(&user_id).cloned().ok_or(StorageError::NotFound)
    }
}
