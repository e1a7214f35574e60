use std::sync::Arc;
use std::time::{Duration, Instant};

use moka::future::Cache;
use sea_orm::DatabaseConnection;

use crate::config::CacheConfig;
use crate::models::issue::IssueView;
use crate::models::representative::RepresentativeView;

#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseConnection,
    pub cache: Arc<ApiCache>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(database: DatabaseConnection, cache: Arc<ApiCache>) -> Self {
        assert!(
            cache.representative_capacity >= 100,
            "Representative cache capacity must be configured"
        );
        Self {
            database,
            cache,
            start_time: Instant::now(),
        }
    }
}

/// In-process read caches for catalog-shaped data. Issue lists are keyed by
/// scope filter, representative profiles by id. Vote and alignment reads
/// are never cached here; both always hit the database.
pub struct ApiCache {
    pub issues: Cache<String, Arc<Vec<IssueView>>>,
    pub representatives: Cache<i64, Arc<RepresentativeView>>,
    pub representative_capacity: u64,
}

impl ApiCache {
    pub fn new(config: &CacheConfig) -> Self {
        assert!(
            config.issues_max_capacity >= 4,
            "Issue cache capacity threshold"
        );
        assert!(
            config.representatives_max_capacity >= 100,
            "Representative cache capacity threshold"
        );

        let issues = Cache::builder()
            .max_capacity(config.issues_max_capacity)
            .time_to_live(Duration::from_secs(config.issues_ttl_seconds))
            .time_to_idle(Duration::from_secs(config.issues_ttl_seconds / 2 + 1))
            .build();

        let representatives = Cache::builder()
            .max_capacity(config.representatives_max_capacity)
            .time_to_live(Duration::from_secs(config.representatives_ttl_seconds))
            .time_to_idle(Duration::from_secs(config.representatives_ttl_seconds / 2 + 1))
            .build();

        Self {
            issues,
            representatives,
            representative_capacity: config.representatives_max_capacity,
        }
    }
}
