use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fight {
    pub fight_id: Uuid,
    pub event_id: Uuid,
    pub weight_class: String,
    pub fighter1_id: Uuid,
    pub fighter2_id: Uuid,
    pub is_main_event: bool,
    pub bout_order: i32,
}

impl Fight {
    /// Whether the fighter is one of the two participants of this bout
    pub fn involves(&self, fighter_id: Uuid) -> bool {
        self.fighter1_id == fighter_id || self.fighter2_id == fighter_id
    }
}
