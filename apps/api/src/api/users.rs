//! Users API routes
//!
//! The users service lives in the application state because the role gate
//! shares it; the router reuses that instance.

use axum::Router;
use domain_users::handlers;

use crate::state::AppState;

/// Create the users router
pub fn router(state: &AppState) -> Router {
    handlers::router(state.users.clone())
}
