use uuid::Uuid;

use crate::error::Result;
use crate::models::{FightResult, Pick};

use super::source::ScoringSource;

/// Points for naming the winner of a decided fight.
pub const WINNER_POINTS: f64 = 1.0;
/// Bonus for naming the finish method, awarded independently of the winner.
pub const METHOD_BONUS: f64 = 0.5;

/// A user's score over the fights they picked on one event.
///
/// `correct_picks` is fractional because of the method bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccuracyResult {
    pub total_picks: u32,
    pub correct_picks: f64,
    pub accuracy_percentage: f64,
}

impl AccuracyResult {
    pub fn from_counts(total_picks: u32, correct_picks: f64) -> Self {
        let accuracy_percentage = if total_picks > 0 {
            correct_picks / f64::from(total_picks) * 100.0
        } else {
            0.0
        };

        Self {
            total_picks,
            correct_picks,
            accuracy_percentage,
        }
    }
}

/// Points earned by a single pick against the fight's result.
///
/// Undecided fights score nothing. Winner and method are judged separately,
/// so a pick can earn 0, 0.5, 1.0 or 1.5.
pub fn score_pick(pick: &Pick, result: Option<&FightResult>) -> f64 {
    let Some(result) = result else {
        return 0.0;
    };

    let mut points = 0.0;
    if pick.fighter_id == result.winner_id {
        points += WINNER_POINTS;
    }
    if pick.method == result.method {
        points += METHOD_BONUS;
    }
    points
}

/// Score a user's picks for an event.
///
/// Only fights the user picked count toward `total_picks`; a picked fight
/// without a result counts but earns nothing yet. No submission at all is a
/// zero result, not an error.
pub async fn compute_accuracy<S>(
    source: &S,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<AccuracyResult>
where
    S: ScoringSource + ?Sized,
{
    let Some(submission) = source.get_submission(user_id, event_id).await? else {
        tracing::debug!(%user_id, %event_id, "No submission, scoring as zero");
        return Ok(AccuracyResult::default());
    };

    let fights = source.get_fights(event_id).await?;

    let mut total_picks = 0u32;
    let mut correct_picks = 0.0;

    for fight in &fights {
        let Some(pick) = submission.pick_for(fight.fight_id) else {
            continue;
        };

        total_picks += 1;

        let result = source.get_result(fight.fight_id).await?;
        correct_picks += score_pick(pick, result.as_ref());
    }

    let accuracy = AccuracyResult::from_counts(total_picks, correct_picks);

    tracing::debug!(
        %user_id,
        %event_id,
        total_picks = accuracy.total_picks,
        correct_picks = accuracy.correct_picks,
        "Computed accuracy"
    );

    Ok(accuracy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinishMethod;
    use crate::services::memory::{MemorySource, pick};

    fn result(winner_id: Uuid, method: FinishMethod) -> FightResult {
        FightResult {
            result_id: Uuid::new_v4(),
            fight_id: Uuid::new_v4(),
            winner_id,
            method,
            round: Some(1),
            time: Some("2:31".to_string()),
        }
    }

    #[test]
    fn test_score_pick_combinations() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let fight_id = Uuid::new_v4();
        let ko_for_a = result(a, FinishMethod::Knockout);

        assert_eq!(score_pick(&pick(fight_id, a, FinishMethod::Knockout), Some(&ko_for_a)), 1.5);
        assert_eq!(score_pick(&pick(fight_id, a, FinishMethod::Decision), Some(&ko_for_a)), 1.0);
        assert_eq!(score_pick(&pick(fight_id, b, FinishMethod::Knockout), Some(&ko_for_a)), 0.5);
        assert_eq!(score_pick(&pick(fight_id, b, FinishMethod::Submission), Some(&ko_for_a)), 0.0);
    }

    #[test]
    fn test_score_pick_undecided() {
        let a = Uuid::new_v4();
        assert_eq!(score_pick(&pick(Uuid::new_v4(), a, FinishMethod::Knockout), None), 0.0);
    }

    #[test]
    fn test_zero_total_has_zero_accuracy() {
        let accuracy = AccuracyResult::from_counts(0, 0.0);
        assert_eq!(accuracy, AccuracyResult::default());
        assert_eq!(accuracy.accuracy_percentage, 0.0);
    }

    #[tokio::test]
    async fn test_no_submission_is_zero_result() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let fight = source.add_fight(event, a, b);
        source.add_result(fight, a, FinishMethod::Knockout);

        let accuracy = compute_accuracy(&source, Uuid::new_v4(), event).await.unwrap();

        assert_eq!(accuracy.total_picks, 0);
        assert_eq!(accuracy.correct_picks, 0.0);
        assert_eq!(accuracy.accuracy_percentage, 0.0);
    }

    #[tokio::test]
    async fn test_event_without_fights_is_zero_result() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let user = source.add_user("ghost");
        let stray_fight = Uuid::new_v4();
        source.submit(user, event, vec![pick(stray_fight, Uuid::new_v4(), FinishMethod::Knockout)]);

        let accuracy = compute_accuracy(&source, user, event).await.unwrap();

        assert_eq!(accuracy, AccuracyResult::default());
    }

    #[tokio::test]
    async fn test_unpicked_fights_are_excluded() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let (a, b, c, d) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let f1 = source.add_fight(event, a, b);
        let f2 = source.add_fight(event, c, d);
        source.add_result(f1, a, FinishMethod::Decision);
        source.add_result(f2, c, FinishMethod::Knockout);

        let user = source.add_user("selective");
        source.submit(user, event, vec![pick(f1, a, FinishMethod::Decision)]);

        let accuracy = compute_accuracy(&source, user, event).await.unwrap();

        assert_eq!(accuracy.total_picks, 1);
        assert_eq!(accuracy.correct_picks, 1.5);
        assert_eq!(accuracy.accuracy_percentage, 150.0);
    }

    #[tokio::test]
    async fn test_undecided_fight_counts_but_scores_nothing() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let (a, b, c, d) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let f1 = source.add_fight(event, a, b);
        let f2 = source.add_fight(event, c, d);
        source.add_result(f1, a, FinishMethod::Knockout);

        let user = source.add_user("early_bird");
        source.submit(
            user,
            event,
            vec![pick(f1, a, FinishMethod::Knockout), pick(f2, d, FinishMethod::Decision)],
        );

        let accuracy = compute_accuracy(&source, user, event).await.unwrap();

        assert_eq!(accuracy.total_picks, 2);
        assert_eq!(accuracy.correct_picks, 1.5);
        assert_eq!(accuracy.accuracy_percentage, 75.0);
    }

    #[tokio::test]
    async fn test_picks_for_other_events_are_ignored() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let other_event = source.add_event();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let f1 = source.add_fight(event, a, b);
        let foreign = source.add_fight(other_event, a, b);
        source.add_result(f1, b, FinishMethod::Submission);
        source.add_result(foreign, a, FinishMethod::Knockout);

        let user = source.add_user("wanderer");
        source.submit(
            user,
            event,
            vec![pick(f1, a, FinishMethod::Submission), pick(foreign, a, FinishMethod::Knockout)],
        );

        let accuracy = compute_accuracy(&source, user, event).await.unwrap();

        assert_eq!(accuracy.total_picks, 1);
        assert_eq!(accuracy.correct_picks, 0.5);
        assert_eq!(accuracy.accuracy_percentage, 50.0);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut source = MemorySource::default();
        let event = source.add_event();
        let user = source.add_user("unlucky");
        source.submit(user, event, vec![]);
        source.fail_reads();

        let err = compute_accuracy(&source, user, event).await.unwrap_err();

        assert!(matches!(err, crate::error::StorageError::Database(_)));
    }
}
