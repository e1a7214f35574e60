use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde::Deserialize;
use tracing::info;

use crate::entities::{issue, representative, representative_vote};
use crate::models::representative::{RepresentativeRegistration, RepresentativeView};
use crate::models::vote::{BallotSubmission, VoteAck};
use crate::state::AppState;

use super::{HttpError, ensure_passion_bounds};

const MAX_LISTING_LIMIT: u64 = 200;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_representative).get(list_representatives))
        .route("/{rep_id}", get(get_representative))
        .route("/{rep_id}/votes", post(record_position))
}

#[derive(Debug, Deserialize)]
struct RepresentativeListQuery {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    county: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    limit: Option<u64>,
    #[serde(default)]
    offset: Option<u64>,
}

async fn register_representative(
    State(state): State<AppState>,
    Json(registration): Json<RepresentativeRegistration>,
) -> Result<(StatusCode, Json<RepresentativeView>), HttpError> {
    if registration.name.trim().is_empty() || registration.position.trim().is_empty() {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "Name, position, and state are required.".to_string(),
        ));
    }

    let state_code = registration.state.trim().to_uppercase();
    if state_code.len() != 2 || !state_code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "State must be a two-letter code.".to_string(),
        ));
    }

    let now = Utc::now().fixed_offset();
    let new_representative = representative::ActiveModel {
        id: NotSet,
        name: Set(registration.name.trim().to_string()),
        position: Set(registration.position.trim().to_string()),
        party: Set(registration.party.clone()),
        state: Set(state_code),
        county: Set(registration.county.clone()),
        city: Set(registration.city.clone()),
        email: Set(registration.email.clone()),
        website: Set(registration.website.clone()),
        office_name: Set(registration.office_name.clone()),
        cong_district: Set(registration.cong_district.clone()),
        state_senate_district: Set(registration.state_senate_district.clone()),
        state_assembly_district: Set(registration.state_assembly_district.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let created = new_representative
        .insert(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    info!("Registered representative {} ({})", created.name, created.id);

    Ok((StatusCode::CREATED, Json(representative_view(created))))
}

/// List representatives, optionally narrowed by residency fields. Filters
/// combine with AND; an absent filter matches everything.
async fn list_representatives(
    Query(query): Query<RepresentativeListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RepresentativeView>>, HttpError> {
    let requested_limit = query.limit.unwrap_or(50);
    if requested_limit == 0 {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "limit must be positive".to_string(),
        ));
    }

    let limit = requested_limit.min(MAX_LISTING_LIMIT);
    let offset = query.offset.unwrap_or(0);
    assert!(limit > 0, "Listing limit must be positive");
    assert!(
        offset <= i64::MAX as u64,
        "Listing offset exceeds database bounds"
    );

    let mut select = representative::Entity::find();
    if let Some(state_code) = query.state.as_ref() {
        select = select.filter(representative::Column::State.eq(state_code.to_uppercase()));
    }
    if let Some(county) = query.county.as_ref() {
        select = select.filter(representative::Column::County.eq(county.clone()));
    }
    if let Some(city) = query.city.as_ref() {
        select = select.filter(representative::Column::City.eq(city.clone()));
    }

    let representatives = select
        .order_by_asc(representative::Column::Id)
        .limit(limit)
        .offset(offset)
        .all(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let views = representatives
        .into_iter()
        .map(representative_view)
        .collect::<Vec<_>>();

    Ok(Json(views))
}

async fn get_representative(
    Path(rep_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RepresentativeView>, HttpError> {
    if let Some(cached) = state.cache.representatives.get(&rep_id).await {
        return Ok(Json((*cached).clone()));
    }

    let representative = representative::Entity::find_by_id(rep_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| {
            HttpError::new(StatusCode::NOT_FOUND, "Representative not found.".to_string())
        })?;

    let view = representative_view(representative);
    state
        .cache
        .representatives
        .insert(rep_id, Arc::new(view.clone()))
        .await;

    Ok(Json(view))
}

/// Record a representative's position on an issue, overwriting any earlier
/// position on the same issue.
async fn record_position(
    Path(rep_id): Path<i64>,
    State(state): State<AppState>,
    Json(submission): Json<BallotSubmission>,
) -> Result<Json<VoteAck>, HttpError> {
    ensure_passion_bounds(submission.passion_weight)?;

    representative::Entity::find_by_id(rep_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| {
            HttpError::new(StatusCode::NOT_FOUND, "Representative not found.".to_string())
        })?;

    issue::Entity::find_by_id(submission.issue_id)
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?
        .ok_or_else(|| HttpError::new(StatusCode::NOT_FOUND, "Issue not found.".to_string()))?;

    let now = Utc::now().fixed_offset();
    let existing = representative_vote::Entity::find_by_id((rep_id, submission.issue_id))
        .one(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    match existing {
        Some(model) => {
            let mut position = model.into_active_model();
            position.stance = Set(submission.stance);
            position.passion_weight = Set(submission.passion_weight);
            position.recorded_at = Set(now);
            position
                .update(&state.database)
                .await
                .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
        }
        None => {
            let position = representative_vote::ActiveModel {
                rep_id: Set(rep_id),
                issue_id: Set(submission.issue_id),
                stance: Set(submission.stance),
                passion_weight: Set(submission.passion_weight),
                recorded_at: Set(now),
            };
            position
                .insert(&state.database)
                .await
                .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
        }
    }

    info!(
        "Recorded position for representative {rep_id} on issue {}",
        submission.issue_id
    );

    Ok(Json(VoteAck {
        message: "Representative vote recorded successfully.".to_string(),
    }))
}

fn representative_view(model: representative::Model) -> RepresentativeView {
    RepresentativeView {
        id: model.id,
        name: model.name,
        position: model.position,
        party: model.party,
        state: model.state,
        county: model.county,
        city: model.city,
        email: model.email,
        website: model.website,
        office_name: model.office_name,
        cong_district: model.cong_district,
        state_senate_district: model.state_senate_district,
        state_assembly_district: model.state_assembly_district,
    }
}
