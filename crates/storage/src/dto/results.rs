use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::FinishMethod;

/// Request payload for recording the outcome of a fight
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultRequest {
    pub fight_id: Uuid,

    pub winner_id: Uuid,

    pub method: FinishMethod,

    #[validate(range(min = 1, max = 5, message = "Round must be between 1 and 5"))]
    pub round: Option<i16>,

    #[validate(custom(function = "validate_fight_time"))]
    pub time: Option<String>,
}

/// Accepts clock times such as `4:59` or `0:32`.
fn validate_fight_time(time: &str) -> Result<(), validator::ValidationError> {
    let is_valid = match time.split_once(':') {
        Some((minutes, seconds)) => {
            !minutes.is_empty()
                && minutes.len() <= 2
                && minutes.chars().all(|c| c.is_ascii_digit())
                && seconds.len() == 2
                && seconds.chars().all(|c| c.is_ascii_digit())
                && seconds < "60"
        }
        None => false,
    };

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_fight_time"))
    }
}
