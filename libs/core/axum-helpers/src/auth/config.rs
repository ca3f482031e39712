use core_config::{env_required, ConfigError, FromEnv};

/// JWT configuration
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Shared HS256 signing secret
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl FromEnv for JwtConfig {
    /// Requires ACCESS_TOKEN_SECRET to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env_required("ACCESS_TOKEN_SECRET")?,
        })
    }
}
