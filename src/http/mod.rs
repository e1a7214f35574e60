use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::scoring;
use crate::state::AppState;

mod alignment;
mod issues;
mod representatives;
mod users;

pub fn router(state: AppState) -> Router {
    assert!(
        state.start_time.elapsed() < Duration::from_secs(86_400),
        "Application uptime exceeds 24 hours before router creation"
    );

    // Configure CORS for browser clients
    let cors = CorsLayer::new()
        // Allow requests from any origin (for development)
        // In production, restrict to specific domains
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([ACCEPT, AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let issues_router = issues::router().with_state(state.clone());
    let users_router = users::router()
        .merge(alignment::router())
        .with_state(state.clone());
    let representatives_router = representatives::router().with_state(state.clone());
    Router::new()
        .route("/health", get(health_live))
        .route("/health/ready", get(health_ready))
        .nest("/issues", issues_router)
        .nest("/users", users_router)
        .nest("/representatives", representatives_router)
        .layer(cors)
        .with_state(state)
}

async fn health_live(State(state): State<AppState>) -> Result<Json<HealthResponse>, HttpError> {
    let uptime = state.start_time.elapsed().as_secs();
    assert!(
        uptime <= 31_536_000,
        "Uptime exceeds one year without restart"
    );
    let response = HealthResponse {
        status: "live",
        uptime_seconds: uptime,
    };
    Ok(Json(response))
}

async fn health_ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, HttpError> {
    state
        .database
        .ping()
        .await
        .map_err(|err| HttpError::new(StatusCode::SERVICE_UNAVAILABLE, err.to_string()))?;

    let response = ReadyResponse {
        status: "ready",
        cache_entries: CacheSummary {
            issues: state.cache.issues.entry_count(),
            representatives: state.cache.representatives.entry_count(),
        },
    };
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
struct ReadyResponse {
    status: &'static str,
    cache_entries: CacheSummary,
}

#[derive(Debug, Serialize)]
struct CacheSummary {
    issues: u64,
    representatives: u64,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: String) -> Self {
        assert!(status != StatusCode::OK, "Error status cannot be 200");
        assert!(!message.is_empty(), "Error message cannot be empty");
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        info!("HTTP error: {}", self.message);
        let body = Json(ErrorBody {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Shared guard for the vote write endpoints. Passion weights outside the
/// ladder are rejected at the boundary so the scoring paths only ever see
/// legal values.
fn ensure_passion_bounds(passion_weight: i16) -> Result<(), HttpError> {
    if !(scoring::MIN_PASSION_WEIGHT..=scoring::MAX_PASSION_WEIGHT).contains(&passion_weight) {
        return Err(HttpError::new(
            StatusCode::BAD_REQUEST,
            "Passion weight must be between 1 and 5.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passion_guard_accepts_ladder_endpoints() {
        assert!(ensure_passion_bounds(1).is_ok());
        assert!(ensure_passion_bounds(3).is_ok());
        assert!(ensure_passion_bounds(5).is_ok());
    }

    #[test]
    fn passion_guard_rejects_out_of_range_weights() {
        assert!(ensure_passion_bounds(0).is_err());
        assert!(ensure_passion_bounds(6).is_err());
        assert!(ensure_passion_bounds(-2).is_err());
    }
}
