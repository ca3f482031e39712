//! Advertisements API routes
//!
//! This module wires the advertisements domain to HTTP routes.

use axum::Router;
use domain_advertisements::{handlers, AdvertisementService, MongoAdvertisementRepository};

use crate::state::AppState;

/// Create the advertisements router
pub fn router(state: &AppState) -> Router {
    let repository = MongoAdvertisementRepository::new(&state.db);
    let service = AdvertisementService::new(repository);

    handlers::router(service)
}
