use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use serde::Deserialize;

use crate::entities::issue;
use crate::models::issue::IssueView;
use crate::state::AppState;

use super::HttpError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_issues))
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct IssueListQuery {
    scope: Option<String>,
}

/// List the ballot catalog, ordered by issue id.
///
/// Without a filter the whole catalog is returned. With `?scope=` the
/// response narrows to that scope plus the national questions, which is
/// what a client showing a state resident their ballot wants.
async fn get_issues(
    Query(query): Query<IssueListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<IssueView>>, HttpError> {
    if let Some(scope) = query.scope.as_ref() {
        assert!(scope.len() <= 128, "Scope filter exceeds defensive bound");
    }
    let cache_key = catalog_cache_key(query.scope.as_deref());

    if let Some(cached) = state.cache.issues.get(&cache_key).await {
        return Ok(Json((*cached).clone()));
    }

    let mut select = issue::Entity::find();
    if let Some(scope) = query.scope.as_ref() {
        select = select.filter(
            Condition::any()
                .add(issue::Column::Scope.eq("National"))
                .add(issue::Column::Scope.eq(scope.clone())),
        );
    }

    let issues = select
        .order_by_asc(issue::Column::Id)
        .all(&state.database)
        .await
        .map_err(|err| HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;

    let views = issues
        .into_iter()
        .map(|issue| IssueView {
            id: issue.id,
            prompt: issue.prompt,
            scope: issue.scope,
        })
        .collect::<Vec<_>>();

    state
        .cache
        .issues
        .insert(cache_key, Arc::new(views.clone()))
        .await;

    Ok(Json(views))
}

/// Filtered and unfiltered listings return different row sets, so their
/// cache keys must stay distinct for every possible scope string.
fn catalog_cache_key(scope: Option<&str>) -> String {
    match scope {
        Some(scope) => format!("scope::{scope}"),
        None => "unfiltered".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_and_literal_scope_values_use_distinct_cache_keys() {
        assert_ne!(catalog_cache_key(None), catalog_cache_key(Some("all")));
        assert_ne!(
            catalog_cache_key(None),
            catalog_cache_key(Some("unfiltered"))
        );
    }

    #[test]
    fn each_scope_keys_its_own_cache_entry() {
        assert_ne!(
            catalog_cache_key(Some("National")),
            catalog_cache_key(Some("NY"))
        );
        assert_eq!(catalog_cache_key(Some("NY")), catalog_cache_key(Some("NY")));
    }
}
