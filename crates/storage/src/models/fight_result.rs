use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// How a fight ended.
///
/// Spelled the same way in JSON and in the `finish_method` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "finish_method")]
pub enum FinishMethod {
    #[serde(rename = "KO")]
    #[sqlx(rename = "KO")]
    Knockout,
    #[serde(rename = "SUB")]
    #[sqlx(rename = "SUB")]
    Submission,
    #[serde(rename = "PTS")]
    #[sqlx(rename = "PTS")]
    Decision,
    #[serde(rename = "DQ")]
    #[sqlx(rename = "DQ")]
    Disqualification,
    #[serde(rename = "NC")]
    #[sqlx(rename = "NC")]
    NoContest,
}

impl FinishMethod {
    /// Players may only predict finishes that a fighter can earn.
    pub fn is_pickable(&self) -> bool {
        matches!(self, Self::Knockout | Self::Submission | Self::Decision)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Knockout => "KO",
            Self::Submission => "SUB",
            Self::Decision => "PTS",
            Self::Disqualification => "DQ",
            Self::NoContest => "NC",
        }
    }
}

/// Recorded outcome of a fight. At most one per fight.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FightResult {
    pub result_id: Uuid,
    pub fight_id: Uuid,
    pub winner_id: Uuid,
    pub method: FinishMethod,
    pub round: Option<i16>,
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickable_methods() {
        assert!(FinishMethod::Knockout.is_pickable());
        assert!(FinishMethod::Submission.is_pickable());
        assert!(FinishMethod::Decision.is_pickable());
        assert!(!FinishMethod::Disqualification.is_pickable());
        assert!(!FinishMethod::NoContest.is_pickable());
    }

    #[test]
    fn test_json_spelling() {
        let method: FinishMethod = serde_json::from_str("\"SUB\"").unwrap();
        assert_eq!(method, FinishMethod::Submission);
        assert_eq!(serde_json::to_string(&FinishMethod::Decision).unwrap(), "\"PTS\"");
        assert!(serde_json::from_str::<FinishMethod>("\"TKO\"").is_err());
    }
}
