use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::accuracy::AccuracyResult;
use crate::services::leaderboard::LeaderboardRow;

/// Accuracy of one user's picks for one event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccuracyResponse {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub total_picks: u32,
    pub correct_picks: f64,
    pub accuracy_percentage: f64,
}

impl AccuracyResponse {
    pub fn new(user_id: Uuid, event_id: Uuid, accuracy: AccuracyResult) -> Self {
        Self {
            user_id,
            event_id,
            total_picks: accuracy.total_picks,
            correct_picks: accuracy.correct_picks,
            accuracy_percentage: accuracy.accuracy_percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: Uuid,
    pub username: String,
    pub total_picks: u32,
    pub correct_picks: f64,
    pub accuracy_percentage: f64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            rank: row.rank,
            user_id: row.user.user_id,
            username: row.user.username,
            total_picks: row.accuracy.total_picks,
            correct_picks: row.accuracy.correct_picks,
            accuracy_percentage: row.accuracy.accuracy_percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub event_id: Uuid,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl LeaderboardResponse {
    pub fn new(event_id: Uuid, rows: Vec<LeaderboardRow>) -> Self {
        Self {
            event_id,
            leaderboard: rows.into_iter().map(LeaderboardEntry::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::services::leaderboard::assign_ranks;
    use serde_json::{Value, json};

    fn row(username: &str, total_picks: u32, correct_picks: f64) -> LeaderboardRow {
        LeaderboardRow {
            rank: 0,
            user: User {
                user_id: Uuid::new_v4(),
                username: username.to_string(),
            },
            accuracy: AccuracyResult::from_counts(total_picks, correct_picks),
        }
    }

    fn keys(value: &Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn test_accuracy_response_json() {
        let user_id = Uuid::new_v4();
        let event_id = Uuid::new_v4();
        let accuracy = AccuracyResult::from_counts(2, 1.5);

        let response = AccuracyResponse::new(user_id, event_id, accuracy);
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(
            keys(&value),
            vec!["accuracy_percentage", "correct_picks", "event_id", "total_picks", "user_id"]
        );
        assert_eq!(value["user_id"], json!(user_id));
        assert_eq!(value["event_id"], json!(event_id));
        assert_eq!(value["total_picks"], json!(2));
        assert_eq!(value["correct_picks"], json!(1.5));
        assert_eq!(value["accuracy_percentage"], json!(75.0));
    }

    #[test]
    fn test_leaderboard_response_json() {
        let event_id = Uuid::new_v4();
        let mut rows = vec![row("steady", 2, 1.0), row("sharp", 1, 1.5), row("tied", 4, 2.0)];
        let steady_id = rows[0].user.user_id;
        assign_ranks(&mut rows);

        let value = serde_json::to_value(LeaderboardResponse::new(event_id, rows)).unwrap();

        assert_eq!(keys(&value), vec!["event_id", "leaderboard"]);
        assert_eq!(value["event_id"], json!(event_id));

        let entries = value["leaderboard"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        for entry in entries {
            assert_eq!(
                keys(entry),
                vec![
                    "accuracy_percentage",
                    "correct_picks",
                    "rank",
                    "total_picks",
                    "user_id",
                    "username"
                ]
            );
        }

        let usernames: Vec<&str> = entries
            .iter()
            .map(|e| e["username"].as_str().unwrap())
            .collect();
        assert_eq!(usernames, vec!["sharp", "steady", "tied"]);

        let ranks: Vec<u64> = entries.iter().map(|e| e["rank"].as_u64().unwrap()).collect();
        assert_eq!(ranks, vec![1, 2, 3]);

        assert_eq!(entries[0]["correct_picks"], json!(1.5));
        assert_eq!(entries[0]["total_picks"], json!(1));
        assert_eq!(entries[0]["accuracy_percentage"], json!(150.0));
        assert_eq!(entries[1]["user_id"], json!(steady_id));
        assert_eq!(entries[1]["correct_picks"], json!(1.0));
        assert_eq!(entries[1]["accuracy_percentage"], json!(50.0));
        assert_eq!(entries[2]["total_picks"], json!(4));
    }
}
