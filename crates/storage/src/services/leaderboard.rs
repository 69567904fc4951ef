use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;

use super::accuracy::{AccuracyResult, compute_accuracy};
use super::source::ScoringSource;

/// One user's standing on an event leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub user: User,
    pub accuracy: AccuracyResult,
}

/// Build the leaderboard for an event.
///
/// Fails with `NoSubmissions` when nobody has submitted picks; users who did
/// submit always appear, even with a zero score.
pub async fn build_leaderboard<S>(source: &S, event_id: Uuid) -> Result<Vec<LeaderboardRow>>
where
    S: ScoringSource + ?Sized,
{
    let submissions = source.get_all_submissions(event_id).await?;
    if submissions.is_empty() {
        return Err(StorageError::NoSubmissions(event_id));
    }

    let mut rows = Vec::with_capacity(submissions.len());
    for submission in &submissions {
        let user = source.get_user(submission.user_id).await?;
        let accuracy = compute_accuracy(source, submission.user_id, event_id).await?;

        rows.push(LeaderboardRow {
            rank: 0,
            user,
            accuracy,
        });
    }

    assign_ranks(&mut rows);

    tracing::debug!(%event_id, entries = rows.len(), "Built leaderboard");

    Ok(rows)
}

/// Order rows by accuracy, highest first, and number them 1..=N.
///
/// The sort is stable so tied rows keep their submission order, and every
/// row gets its own rank even when tied with the row above.
pub fn assign_ranks(rows: &mut [LeaderboardRow]) {
    rows.sort_by(|a, b| {
        b.accuracy
            .accuracy_percentage
            .total_cmp(&a.accuracy.accuracy_percentage)
    });

    for (position, row) in rows.iter_mut().enumerate() {
        row.rank = position as u32 + 1;
    }
}
