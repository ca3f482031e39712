use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_carts::MongoCartRepository;
use domain_payments::StripeClient;
use domain_users::{MongoUserRepository, UserService};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Connect to MongoDB with retry
    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;

    // Get the database
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Initialize indexes and the shared users service
    let user_repository = MongoUserRepository::new(&db);
    user_repository.init_indexes().await?;
    MongoCartRepository::new(&db).init_indexes().await?;

    let users = UserService::new(user_repository);
    let jwt = axum_helpers::JwtAuth::new(&config.jwt);
    let stripe = StripeClient::new(&config.stripe);

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
        jwt,
        stripe,
        users,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs and common middleware
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Merge health endpoints
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting MediHealth API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown; state moves into the
    // cleanup future
    let server_config = state.config.server.clone();
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            state.mongo_client.shutdown().await;
            info!("MongoDB connection closed successfully");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("MediHealth API shutdown complete");
    Ok(())
}
