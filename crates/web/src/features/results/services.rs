use sqlx::PgPool;
use storage::{
    dto::{
        results::RecordResultRequest,
        scoring::{AccuracyResponse, LeaderboardResponse},
    },
    error::Result,
    models::FightResult,
    services::{
        accuracy::compute_accuracy, leaderboard::build_leaderboard, results,
        source::PgScoringSource,
    },
};
use uuid::Uuid;

/// Compute a user's accuracy for an event
pub async fn get_accuracy(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<AccuracyResponse> {
    let source = PgScoringSource::new(pool);
    let accuracy = compute_accuracy(&source, user_id, event_id).await?;

    Ok(AccuracyResponse::new(user_id, event_id, accuracy))
}

/// Build the ranked leaderboard for an event
pub async fn get_leaderboard(pool: &PgPool, event_id: Uuid) -> Result<LeaderboardResponse> {
    let source = PgScoringSource::new(pool);
    let rows = build_leaderboard(&source, event_id).await?;

    Ok(LeaderboardResponse::new(event_id, rows))
}

/// Get the result of a fight
pub async fn get_fight_result(pool: &PgPool, fight_id: Uuid) -> Result<FightResult> {
    results::get_fight_result(pool, fight_id).await
}

/// Record the result of a fight
pub async fn record_result(pool: &PgPool, request: &RecordResultRequest) -> Result<FightResult> {
    results::record_result(pool, request).await
}
