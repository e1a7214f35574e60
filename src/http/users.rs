use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};
use tracing::info;

use crate::entities::{issue, user, user_vote};
use crate::models::user::{UserRegistration, UserView};
use crate::models::vote::{BallotSubmission, VoteAck, VoteUpdate, VoteView};
use crate::state::AppState;

use super::{HttpError, ensure_passion_bounds};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/{user_id}/votes", get(get_votes).post(submit_vote))
        .route("/{user_id}/votes/{issue_id}", put(update_vote))
}

/// Create a user record holding the residency fields the alignment sweep
/// filters on.
async fn register_user(
    State(state): State<AppState>,
    Json(registration): Json<UserRegistration>,
) -> Result<(StatusCode, Json<UserView>), HttpError> {
    let state_code = registration.state.trim().to_uppercase();
    if state_code.len() != 2 || !state_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "State must be a two-letter code.".to_string(),
        ));
    }

    let county = registration
        .county
        .as_ref()
        .map(|county| county.trim().to_string())
        .filter(|county| !county.is_empty());
    if let Some(county) = county.as_ref() {
        assert!(county.len() <= 64, "County exceeds defensive bound");
    }

    let new_user = user::ActiveModel {
        id: NotSet,
        state: Set(state_code),
        county: Set(county),
        created_at: Set(Utc::now().fixed_offset()),
    };

    let created = new_user
        .insert(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let view = UserView {
        id: created.id,
        state: created.state,
        county: created.county,
        created_at: created.created_at.timestamp(),
    };

    Ok((StatusCode::CREATED, Json(view)))
}

async fn get_votes(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Vec<VoteView>>, HttpError> {
    user::Entity::find_by_id(user_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "User not found.".to_string()))?;

    let votes = user_vote::Entity::find()
        .filter(user_vote::Column::UserId.eq(user_id))
        .order_by_asc(user_vote::Column::IssueId)
        .all(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let views = votes
        .into_iter()
        .map(|vote| VoteView {
            issue_id: vote.issue_id,
            stance: vote.stance,
            passion_weight: vote.passion_weight,
            last_updated: vote.last_updated.timestamp(),
        })
        .collect::<Vec<_>>();

    Ok(Json(views))
}

/// Create or overwrite the user's ballot on one issue.
///
/// Issue ids must exist in the seeded catalog; unknown ids are rejected
/// rather than inserted on the fly.
async fn submit_vote(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Json(submission): Json<BallotSubmission>,
) -> Result<(StatusCode, Json<VoteAck>), HttpError> {
    ensure_passion_bounds(submission.passion_weight)?;

    user::Entity::find_by_id(user_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "User not found.".to_string()))?;

    issue::Entity::find_by_id(submission.issue_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "Issue not found.".to_string()))?;

    let now = Utc::now().fixed_offset();
    let existing = user_vote::Entity::find_by_id((user_id, submission.issue_id))
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    match existing {
        Some(model) => {
            let mut ballot = model.into_active_model();
            ballot.stance = Set(submission.stance);
            ballot.passion_weight = Set(submission.passion_weight);
            ballot.last_updated = Set(now);
            ballot
                .update(&state.database)
                .await
                .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
        }
        None => {
            let ballot = user_vote::ActiveModel {
                user_id: Set(user_id),
                issue_id: Set(submission.issue_id),
                stance: Set(submission.stance),
                passion_weight: Set(submission.passion_weight),
                last_updated: Set(now),
            };
            ballot
                .insert(&state.database)
                .await
                .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
        }
    }

    info!(
        "Recorded vote for user {user_id} on issue {} (stance={}, passion={})",
        submission.issue_id, submission.stance, submission.passion_weight
    );

    Ok((
        StatusCode::CREATED,
        Json(VoteAck {
            message: "Vote created/updated successfully.".to_string(),
        }),
    ))
}

/// Change an existing ballot. Unlike the upsert above this refuses to
/// invent a row, matching how clients distinguish "edit" from "cast".
async fn update_vote(
    Path((user_id, issue_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
    Json(update): Json<VoteUpdate>,
) -> Result<Json<VoteAck>, HttpError> {
    ensure_passion_bounds(update.passion_weight)?;

    let existing = user_vote::Entity::find_by_id((user_id, issue_id))
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "Vote not found.".to_string()))?;

    let mut ballot = existing.into_active_model();
    ballot.stance = Set(update.stance);
    ballot.passion_weight = Set(update.passion_weight);
    ballot.last_updated = Set(Utc::now().fixed_offset());
    ballot
        .update(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    Ok(Json(VoteAck {
        message: "Vote updated successfully.".to_string(),
    }))
}
