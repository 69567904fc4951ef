use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::picks::{EventPicksResponse, SubmitPicksRequest},
    error::Result,
    services::picks,
};
use uuid::Uuid;

/// Get the caller's picks for an event, empty if none were submitted
pub async fn get_picks(pool: &PgPool, user_id: Uuid, event_id: Uuid) -> Result<EventPicksResponse> {
    let submission = picks::get_picks(pool, user_id, event_id).await?;

    Ok(submission
        .map(EventPicksResponse::from)
        .unwrap_or_else(|| EventPicksResponse::empty(event_id)))
}

/// Submit or replace the caller's picks for an event
pub async fn submit_picks(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
    request: SubmitPicksRequest,
) -> Result<EventPicksResponse> {
    let submission =
        picks::submit_picks(pool, user_id, event_id, &request.into_picks(), Utc::now()).await?;

    Ok(EventPicksResponse::from(submission))
}
