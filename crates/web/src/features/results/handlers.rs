use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        results::RecordResultRequest,
        scoring::{AccuracyResponse, LeaderboardResponse},
    },
    models::FightResult,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results/accuracy/{user_id}/{event_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Accuracy of the user's picks; all zeros when the user has not submitted", body = AccuracyResponse)
    ),
    tag = "results"
)]
pub async fn get_accuracy(
    State(db): State<Database>,
    Path((user_id, event_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AccuracyResponse>, WebError> {
    let accuracy = services::get_accuracy(db.pool(), user_id, event_id).await?;

    Ok(Json(accuracy))
}

#[utoipa::path(
    get,
    path = "/api/results/leaderboard/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Users ranked by accuracy", body = LeaderboardResponse),
        (status = 404, description = "No picks found for this event")
    ),
    tag = "results"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let leaderboard = services::get_leaderboard(db.pool(), event_id).await?;

    Ok(Json(leaderboard).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/fight/{fight_id}",
    params(
        ("fight_id" = Uuid, Path, description = "Fight ID")
    ),
    responses(
        (status = 200, description = "Fight result", body = FightResult),
        (status = 404, description = "No result found for this fight")
    ),
    tag = "results"
)]
pub async fn get_fight_result(
    State(db): State<Database>,
    Path(fight_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let result = services::get_fight_result(db.pool(), fight_id).await?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = RecordResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded", body = FightResult),
        (status = 400, description = "Validation error or winner not in fight"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Fight not found"),
        (status = 409, description = "Result already exists for this fight")
    ),
    tag = "results"
)]
pub async fn record_result(
    State(db): State<Database>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::record_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}
