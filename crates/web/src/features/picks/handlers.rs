use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::picks::{CallerParams, EventPicksResponse, SubmitPicksRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/picks/event/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        CallerParams
    ),
    responses(
        (status = 200, description = "The caller's picks, empty if none were submitted", body = EventPicksResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "picks"
)]
pub async fn get_picks(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Query(caller): Query<CallerParams>,
) -> Result<Response, WebError> {
    let picks = services::get_picks(db.pool(), caller.user_id, event_id).await?;

    Ok(Json(picks).into_response())
}

#[utoipa::path(
    post,
    path = "/api/picks/event/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        CallerParams
    ),
    request_body = SubmitPicksRequest,
    responses(
        (status = 200, description = "Picks stored, replacing any earlier submission", body = EventPicksResponse),
        (status = 400, description = "Validation error, locked event or pick outside the card"),
        (status = 404, description = "Event not found")
    ),
    tag = "picks"
)]
pub async fn submit_picks(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Query(caller): Query<CallerParams>,
    Json(req): Json<SubmitPicksRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let picks = services::submit_picks(db.pool(), caller.user_id, event_id, req).await?;

    Ok(Json(picks).into_response())
}
