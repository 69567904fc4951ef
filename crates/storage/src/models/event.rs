use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A card of fights. Picks are frozen once `lock_time` has passed; a
/// submission at the lock instant itself is still accepted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub location: String,
    pub description: Option<String>,
    pub event_date: NaiveDate,
    pub lock_time: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl Event {
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        self.lock_time.is_some_and(|lock| lock < now)
    }
}
