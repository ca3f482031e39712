//! Carts API routes
//!
//! This module wires the carts domain to HTTP routes.

use axum::Router;
use domain_carts::{handlers, CartService, MongoCartRepository};

use crate::state::AppState;

/// Create the carts router
pub fn router(state: &AppState) -> Router {
    let repository = MongoCartRepository::new(&state.db);
    let service = CartService::new(repository);

    handlers::router(service)
}
