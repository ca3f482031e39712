//! Analytics API routes
//!
//! This module wires the analytics domain to HTTP routes.

use axum::Router;
use domain_analytics::{handlers, AnalyticsService, MongoAnalyticsRepository};

use crate::state::AppState;

/// Create the analytics router (spans /admin-stats and /order-stats)
pub fn router(state: &AppState) -> Router {
    let repository = MongoAnalyticsRepository::new(&state.db);
    let service = AnalyticsService::new(repository);

    handlers::router(service)
}
