use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// Import shared configs from the library crates
use axum_helpers::JwtConfig;
use database::mongodb::MongoConfig;
use domain_payments::StripeConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub stripe: StripeConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let jwt = JwtConfig::from_env()?; // Required - will fail if not set
        let stripe = StripeConfig::from_env()?; // Required - will fail if not set

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            jwt,
            stripe,
            environment,
        })
    }
}
