use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{FinishMethod, Pick, PickSubmission};

/// Identifies the caller until real authentication is wired in
#[derive(Debug, Deserialize, IntoParams)]
pub struct CallerParams {
    pub user_id: Uuid,
}

/// A single prediction in a submission payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PickRequest {
    pub fight_id: Uuid,

    pub fighter_id: Uuid,

    #[validate(custom(function = "validate_pickable_method"))]
    pub method: FinishMethod,
}

/// Request payload for submitting (or replacing) picks for an event.
///
/// An empty list is allowed and clears the user's earlier picks.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPicksRequest {
    #[validate(nested)]
    pub picks: Vec<PickRequest>,
}

impl SubmitPicksRequest {
    pub fn into_picks(self) -> Vec<Pick> {
        self.picks
            .into_iter()
            .map(|p| Pick {
                fight_id: p.fight_id,
                fighter_id: p.fighter_id,
                method: p.method,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPicksResponse {
    pub event_id: Uuid,
    pub picks: Vec<Pick>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl EventPicksResponse {
    pub fn empty(event_id: Uuid) -> Self {
        Self {
            event_id,
            picks: Vec::new(),
            submitted_at: None,
        }
    }
}

impl From<PickSubmission> for EventPicksResponse {
    fn from(submission: PickSubmission) -> Self {
        Self {
            event_id: submission.event_id,
            picks: submission.picks,
            submitted_at: Some(submission.submitted_at),
        }
    }
}

fn validate_pickable_method(method: &FinishMethod) -> Result<(), validator::ValidationError> {
    if method.is_pickable() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("method_not_pickable"))
    }
}
