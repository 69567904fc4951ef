use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::FinishMethod;

/// One prediction: who wins a fight and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pick {
    pub fight_id: Uuid,
    pub fighter_id: Uuid,
    pub method: FinishMethod,
}

/// A user's full set of picks for one event.
///
/// There is at most one per (user, event); resubmitting replaces `picks`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PickSubmission {
    pub submission_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub picks: Vec<Pick>,
    pub submitted_at: DateTime<Utc>,
}

impl PickSubmission {
    pub fn pick_for(&self, fight_id: Uuid) -> Option<&Pick> {
        self.picks.iter().find(|pick| pick.fight_id == fight_id)
    }
}
