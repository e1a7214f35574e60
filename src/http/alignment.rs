use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::alignment::{AlignmentError, alignment_for_representative, refresh_user_alignment};
use crate::models::alignment::{AlignmentResponse, RefreshSummary};
use crate::state::AppState;

use super::HttpError;

/// Routes are relative to the /users nest; the full paths are
/// /users/{user_id}/alignment/{rep_id} and /users/{user_id}/alignment/refresh.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/alignment/{rep_id}", get(get_alignment))
        .route("/{user_id}/alignment/refresh", post(refresh_alignment))
}

/// Live alignment read. Always recomputes from the vote tables; the
/// alignment_scores cache is only ever written, never served from here.
async fn get_alignment(
    Path((user_id, rep_id)): Path<(i64, i64)>,
    State(state): State<AppState>,
) -> Result<Json<AlignmentResponse>, HttpError> {
    let response = alignment_for_representative(&state.database, user_id, rep_id)
        .await
        .map_err(map_alignment_error)?;
    Ok(Json(response))
}

async fn refresh_alignment(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RefreshSummary>, HttpError> {
    let outcome = refresh_user_alignment(&state.database, user_id)
        .await
        .map_err(map_alignment_error)?;

    let summary = RefreshSummary {
        message: "Alignment scores recalculated successfully.".to_string(),
        representatives_scored: outcome.scored,
        representatives_skipped: outcome.skipped,
        representatives_failed: outcome.failed,
    };
    Ok(Json(summary))
}

fn map_alignment_error(err: AlignmentError) -> HttpError {
    match err {
        AlignmentError::UserNotFound(_) => {
            HttpError::new(StatusCode::NOT_FOUND, "User not found.".to_string())
        }
        AlignmentError::RepresentativeNotFound(_) => {
            HttpError::new(StatusCode::NOT_FOUND, "Representative not found.".to_string())
        }
        AlignmentError::Database(err) => {
            HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
