//! Payments API routes
//!
//! This module wires the payments domain to HTTP routes.

use axum::Router;
use domain_payments::{handlers, MongoPaymentRepository, PaymentService};

use crate::state::AppState;

/// Create the payments router (spans /create-payment-intent and /payments)
pub fn router(state: &AppState) -> Router {
    let repository = MongoPaymentRepository::new(&state.db);
    let service = PaymentService::new(repository, state.stripe.clone());

    handlers::router(service)
}
