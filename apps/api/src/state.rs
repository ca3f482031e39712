//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers. The state contains:
//! - Configuration
//! - MongoDB client and database handle
//! - JWT authentication
//! - Stripe client
//! - The users service (shared because the role gate reads it)

use axum_helpers::JwtAuth;
use domain_payments::StripeClient;
use domain_users::{MongoUserRepository, UserService};
use mongodb::{Client, Database};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones),
/// providing access to:
/// - Application configuration
/// - MongoDB client (cloneable, shares the underlying connection pool)
/// - JWT signing/verification
/// - The Stripe payment-intent client
/// - The users service, also backing the admin authorization gate
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Stateless JWT authentication
    pub jwt: JwtAuth,
    /// Stripe payment-intent client
    pub stripe: StripeClient,
    /// Users service, shared with the role gate
    pub users: UserService<MongoUserRepository>,
}
