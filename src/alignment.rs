//! Alignment computation between a user's ballots and the representatives
//! who serve them.
//!
//! The live read joins both vote sets at request time and renders a full
//! per-issue breakdown under the ladder multiplier. The bulk refresh walks
//! every representative in the user's state and writes unrounded linear
//! scores into the cache table; those rows are allowed to go stale until
//! the next refresh.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter,
};
use tracing::{info, warn};

use crate::entities::prelude::{AlignmentScore, Representative, RepresentativeVote, User, UserVote};
use crate::entities::{alignment_score, representative, representative_vote, user_vote};
use crate::models::alignment::{AlignmentDetail, AlignmentResponse};
use crate::scoring::{self, StancePair, WeightFormula};

/// Body text returned when the two sides share no issues.
pub const NO_DATA_MESSAGE: &str = "No alignment data available for this representative.";

#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("user {0} not found")]
    UserNotFound(i64),
    #[error("representative {0} not found")]
    RepresentativeNotFound(i64),
}

/// A user ballot and a representative position joined on one issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedBallot {
    pub issue_id: i64,
    pub user_stance: bool,
    pub user_passion: i16,
    pub rep_stance: bool,
    pub rep_passion: i16,
}

impl MatchedBallot {
    fn stance_pair(&self) -> StancePair {
        StancePair {
            user_stance: self.user_stance,
            user_passion: self.user_passion,
            rep_stance: self.rep_stance,
            rep_passion: self.rep_passion,
        }
    }

    fn detail(&self, formula: WeightFormula) -> AlignmentDetail {
        AlignmentDetail {
            issue_id: self.issue_id,
            user_stance: self.user_stance,
            user_passion: self.user_passion,
            representative_stance: self.rep_stance,
            representative_passion: self.rep_passion,
            base_alignment: scoring::base_alignment(self.stance_pair()),
            weight_multiplier: formula.multiplier(self.user_passion),
        }
    }
}

/// Join user ballots against representative positions on issue id. The
/// result is ordered by issue id so breakdowns render stably regardless of
/// row order in either table.
pub fn match_ballots(
    user_votes: &[user_vote::Model],
    rep_votes: &[representative_vote::Model],
) -> Vec<MatchedBallot> {
    let positions: HashMap<i64, &representative_vote::Model> =
        rep_votes.iter().map(|vote| (vote.issue_id, vote)).collect();

    let mut matched: Vec<MatchedBallot> = user_votes
        .iter()
        .filter_map(|ballot| {
            positions.get(&ballot.issue_id).map(|position| MatchedBallot {
                issue_id: ballot.issue_id,
                user_stance: ballot.stance,
                user_passion: ballot.passion_weight,
                rep_stance: position.stance,
                rep_passion: position.passion_weight,
            })
        })
        .collect();

    matched.sort_by_key(|ballot| ballot.issue_id);
    assert!(
        matched.len() <= user_votes.len(),
        "Join cannot grow the ballot set"
    );
    matched
}

/// Compute the live alignment between one user and one representative.
///
/// Scores are recomputed from the vote tables on every call; the cached
/// `alignment_scores` rows are never consulted here.
pub async fn alignment_for_representative(
    database: &DatabaseConnection,
    user_id: i64,
    rep_id: i64,
) -> Result<AlignmentResponse, AlignmentError> {
    User::find_by_id(user_id)
        .one(database)
        .await?
        .ok_or(AlignmentError::UserNotFound(user_id))?;

    let representative = Representative::find_by_id(rep_id)
        .one(database)
        .await?
        .ok_or(AlignmentError::RepresentativeNotFound(rep_id))?;

    let user_votes = UserVote::find()
        .filter(user_vote::Column::UserId.eq(user_id))
        .all(database)
        .await?;
    let rep_votes = RepresentativeVote::find()
        .filter(representative_vote::Column::RepId.eq(rep_id))
        .all(database)
        .await?;

    let matched = match_ballots(&user_votes, &rep_votes);
    let Some(score) = scoring::weighted_percentage(
        matched.iter().map(MatchedBallot::stance_pair),
        WeightFormula::Ladder,
    ) else {
        return Ok(AlignmentResponse::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        });
    };

    let details = matched
        .iter()
        .map(|ballot| ballot.detail(WeightFormula::Ladder))
        .collect();

    Ok(AlignmentResponse::Scored {
        representative_name: representative.name,
        alignment_score: scoring::format_percentage(score),
        details,
    })
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub scored: u64,
    pub skipped: u64,
    pub failed: u64,
}

/// Recompute and persist cached scores for every representative in the
/// user's state.
///
/// Representatives sharing no issues with the user are skipped entirely,
/// which leaves any previously cached row for them untouched. A persistence
/// failure for one representative is logged and does not abort the rest of
/// the sweep.
pub async fn refresh_user_alignment(
    database: &DatabaseConnection,
    user_id: i64,
) -> Result<RefreshOutcome, AlignmentError> {
    let user = User::find_by_id(user_id)
        .one(database)
        .await?
        .ok_or(AlignmentError::UserNotFound(user_id))?;

    let user_votes = UserVote::find()
        .filter(user_vote::Column::UserId.eq(user_id))
        .all(database)
        .await?;

    let representatives = Representative::find()
        .filter(representative::Column::State.eq(user.state.clone()))
        .all(database)
        .await?;

    let mut outcome = RefreshOutcome::default();
    for rep in &representatives {
        let rep_votes = RepresentativeVote::find()
            .filter(representative_vote::Column::RepId.eq(rep.id))
            .all(database)
            .await?;

        let matched = match_ballots(&user_votes, &rep_votes);
        let Some(score) = scoring::weighted_percentage(
            matched.iter().map(MatchedBallot::stance_pair),
            WeightFormula::Linear,
        ) else {
            outcome.skipped += 1;
            continue;
        };

        // Stored unrounded; display rounding happens at the edge.
        match persist_score(database, user_id, rep.id, score).await {
            Ok(()) => outcome.scored += 1,
            Err(err) => {
                warn!(
                    user_id,
                    rep_id = rep.id,
                    "Failed to persist alignment score: {err}"
                );
                outcome.failed += 1;
            }
        }
    }

    info!(
        user_id,
        scored = outcome.scored,
        skipped = outcome.skipped,
        failed = outcome.failed,
        "Alignment refresh complete"
    );
    Ok(outcome)
}

async fn persist_score(
    database: &DatabaseConnection,
    user_id: i64,
    rep_id: i64,
    score: f64,
) -> Result<(), DbErr> {
    assert!(score.is_finite(), "Alignment score must be finite");

    let now = Utc::now().fixed_offset();
    match AlignmentScore::find_by_id((user_id, rep_id)).one(database).await? {
        Some(model) => {
            let mut cached = model.into_active_model();
            cached.score = Set(score);
            cached.computed_at = Set(now);
            cached.update(database).await?;
        }
        None => {
            let cached = alignment_score::ActiveModel {
                user_id: Set(user_id),
                rep_id: Set(rep_id),
                score: Set(score),
                computed_at: Set(now),
            };
            cached.insert(database).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_ballot(issue_id: i64, stance: bool, passion: i16) -> user_vote::Model {
        user_vote::Model {
            user_id: 1,
            issue_id,
            stance,
            passion_weight: passion,
            last_updated: Utc::now().fixed_offset(),
        }
    }

    fn rep_position(issue_id: i64, stance: bool, passion: i16) -> representative_vote::Model {
        representative_vote::Model {
            rep_id: 7,
            issue_id,
            stance,
            passion_weight: passion,
            recorded_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn matches_only_shared_issues() {
        let user_votes = vec![
            user_ballot(101, true, 5),
            user_ballot(102, false, 2),
            user_ballot(103, true, 1),
        ];
        let rep_votes = vec![
            rep_position(102, false, 4),
            rep_position(103, false, 3),
            rep_position(104, true, 5),
        ];

        let matched = match_ballots(&user_votes, &rep_votes);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].issue_id, 102);
        assert!(!matched[0].user_stance);
        assert_eq!(matched[0].rep_passion, 4);
        assert_eq!(matched[1].issue_id, 103);
        assert!(matched[1].user_stance);
        assert!(!matched[1].rep_stance);
    }

    #[test]
    fn orders_matches_by_issue_id() {
        let user_votes = vec![
            user_ballot(220, true, 3),
            user_ballot(101, true, 3),
            user_ballot(115, false, 2),
        ];
        let rep_votes = vec![
            rep_position(115, false, 1),
            rep_position(101, true, 5),
            rep_position(220, true, 2),
        ];

        let matched = match_ballots(&user_votes, &rep_votes);
        let ids: Vec<i64> = matched.iter().map(|ballot| ballot.issue_id).collect();
        assert_eq!(ids, vec![101, 115, 220]);
    }

    #[test]
    fn disjoint_ballots_match_nothing() {
        let user_votes = vec![user_ballot(101, true, 5)];
        let rep_votes = vec![rep_position(201, false, 5)];

        let matched = match_ballots(&user_votes, &rep_votes);
        assert!(matched.is_empty());
        assert!(
            scoring::weighted_percentage(
                matched.iter().map(MatchedBallot::stance_pair),
                WeightFormula::Ladder,
            )
            .is_none()
        );
    }

    #[test]
    fn detail_rows_carry_formula_terms() {
        let user_votes = vec![user_ballot(107, true, 4)];
        let rep_votes = vec![rep_position(107, true, 2)];

        let matched = match_ballots(&user_votes, &rep_votes);
        let detail = matched[0].detail(WeightFormula::Ladder);

        // Positions 9 and 7: gap 2, same stance, user passion 4.
        assert_eq!(detail.issue_id, 107);
        assert!((detail.base_alignment - 0.8).abs() < 1e-9);
        assert_eq!(detail.weight_multiplier, 1.4);
        assert_eq!(detail.representative_passion, 2);
    }
}
