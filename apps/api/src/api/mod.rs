//! API routes module
//!
//! This module wires the domain routers into the MediHealth HTTP surface.

pub mod advertisements;
pub mod auth;
pub mod carts;
pub mod health;
pub mod medicines;
pub mod payments;
pub mod stats;
pub mod users;

use axum::{middleware, Extension, Router};
use axum_helpers::optional_jwt_auth_middleware;
use domain_users::RoleGate;

use crate::state::AppState;

/// Create all API routes, mounted at the root.
///
/// Two cross-cutting layers wrap every route:
/// - the optional JWT middleware, which attaches verified claims so that
///   gated handlers can demand them;
/// - the role gate extension, which lets any domain's admin extractor
///   consult the users collection.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/medicine", medicines::router(state))
        .nest("/carts", carts::router(state))
        .nest("/jwt", auth::router(state))
        .nest("/users", users::router(state))
        .nest("/advertisement", advertisements::router(state))
        .merge(payments::router(state)) // /create-payment-intent + /payments
        .merge(stats::router(state)) // /admin-stats + /order-stats
        .layer(middleware::from_fn_with_state(
            state.jwt.clone(),
            optional_jwt_auth_middleware,
        ))
        .layer(Extension(RoleGate::new(state.users.clone())))
}

/// Creates a router with the /ready endpoint that performs an actual
/// MongoDB health check.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::readiness_check))
        .with_state(state)
}
