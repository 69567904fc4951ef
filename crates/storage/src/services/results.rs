use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::results::RecordResultRequest;
use crate::error::{Result, StorageError};
use crate::models::{Fight, FightResult};
use crate::repository::{fight::FightRepository, fight_result::FightResultRepository};

/// The declared winner must have been in the fight.
pub fn check_winner(fight: &Fight, winner_id: Uuid) -> Result<()> {
    if fight.involves(winner_id) {
        Ok(())
    } else {
        Err(StorageError::Rejected(
            "Winner must be one of the fighters in the fight".to_string(),
        ))
    }
}

/// Record the outcome of a fight. Each fight gets exactly one result.
pub async fn record_result(pool: &PgPool, request: &RecordResultRequest) -> Result<FightResult> {
    let fight = FightRepository::new(pool).find_by_id(request.fight_id).await?;
    check_winner(&fight, request.winner_id)?;

    let repo = FightResultRepository::new(pool);
    if repo.find_by_fight(fight.fight_id).await?.is_some() {
        return Err(StorageError::ConstraintViolation(
            "Result already exists for this fight".to_string(),
        ));
    }

    let result = repo.create(request).await?;

    tracing::info!(
        fight_id = %result.fight_id,
        winner_id = %result.winner_id,
        method = result.method.as_str(),
        "Fight result recorded"
    );

    Ok(result)
}

/// Get the result of a fight, `NotFound` while it is undecided
pub async fn get_fight_result(pool: &PgPool, fight_id: Uuid) -> Result<FightResult> {
    FightResultRepository::new(pool)
        .find_by_fight(fight_id)
        .await?
        .ok_or(StorageError::NotFound)
}
