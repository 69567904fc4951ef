use std::collections::HashSet;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Event, Fight, Pick, PickSubmission};
use crate::repository::{
    event::EventRepository, fight::FightRepository, pick_submission::PickSubmissionRepository,
};

/// Check a submission against the event's card and lock policy.
pub fn check_submission(
    event: &Event,
    fights: &[Fight],
    picks: &[Pick],
    now: DateTime<Utc>,
) -> Result<()> {
    if !event.is_active {
        return Err(StorageError::Rejected("Event is not active".to_string()));
    }

    if event.is_locked_at(now) {
        return Err(StorageError::Rejected(
            "Event has already started - picks are locked".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(picks.len());

    for pick in picks {
        let Some(fight) = fights.iter().find(|f| f.fight_id == pick.fight_id) else {
            return Err(StorageError::Rejected(format!(
                "Fight {} does not belong to this event",
                pick.fight_id
            )));
        };

        if !fight.involves(pick.fighter_id) {
            return Err(StorageError::Rejected(format!(
                "Fighter {} is not in fight {}",
                pick.fighter_id, pick.fight_id
            )));
        }

        if !pick.method.is_pickable() {
            return Err(StorageError::Rejected(format!(
                "Method {} cannot be picked",
                pick.method.as_str()
            )));
        }

        if !seen.insert(pick.fight_id) {
            return Err(StorageError::Rejected(format!(
                "Fight {} was picked more than once",
                pick.fight_id
            )));
        }
    }

    Ok(())
}

/// Submit or replace a user's picks for an event
pub async fn submit_picks(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
    picks: &[Pick],
    now: DateTime<Utc>,
) -> Result<PickSubmission> {
    let event = EventRepository::new(pool).find_by_id(event_id).await?;
    let fights = FightRepository::new(pool).list_by_event(event_id).await?;

    if let Err(e) = check_submission(&event, &fights, picks, now) {
        tracing::warn!(%user_id, %event_id, "Pick submission rejected: {}", e);
        return Err(e);
    }

    let submission = PickSubmissionRepository::new(pool)
        .upsert(user_id, event_id, picks, now)
        .await?;

    tracing::info!(
        %user_id,
        %event_id,
        picks = submission.picks.len(),
        "Picks submitted"
    );

    Ok(submission)
}

/// Get a user's picks for an event. `None` if nothing has been submitted yet.
pub async fn get_picks(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<Option<PickSubmission>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    PickSubmissionRepository::new(pool)
        .find(user_id, event_id)
        .await
}
