//! Catalog API routes
//!
//! This module wires the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{handlers, CatalogService, MongoMedicineRepository};

use crate::state::AppState;

/// Create the catalog router
pub fn router(state: &AppState) -> Router {
    let repository = MongoMedicineRepository::new(&state.db);
    let service = CatalogService::new(repository);

    handlers::router(service)
}
