//! Minimal Stripe payment-intent client.
//!
//! The processor is an opaque black box from this service's point of view:
//! one form-encoded POST per checkout, answered with a client secret the
//! front-end uses to complete the charge.

use core_config::{env_required, ConfigError, FromEnv};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{PaymentError, PaymentResult};

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Stripe configuration
#[derive(Clone, Debug)]
pub struct StripeConfig {
    /// Secret API key ("sk_...")
    pub secret_key: String,
}

impl StripeConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }
}

impl FromEnv for StripeConfig {
    /// Requires STRIPE_SECRET_KEY to be set (no default)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret_key: env_required("STRIPE_SECRET_KEY")?,
        })
    }
}

/// Convert a major-unit price to the processor's minor-unit integer.
///
/// Truncates, matching the processor's integer-cent contract. Nothing here
/// rejects zero or negative amounts; the processor's own error surfaces
/// instead.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0) as i64
}

#[derive(Debug, Deserialize)]
struct PaymentIntent {
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: String,
}

/// HTTP client for the Stripe payment-intent endpoint
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
}

impl StripeClient {
    /// Create a new StripeClient
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
        }
    }

    /// Create a card payment intent and return its client secret.
    #[instrument(skip(self))]
    pub async fn create_payment_intent(&self, amount_minor: i64) -> PaymentResult<String> {
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(PAYMENT_INTENTS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<StripeErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "unreadable error body".to_string());

            tracing::warn!(%status, "Payment intent creation rejected: {}", message);
            return Err(PaymentError::Gateway(message));
        }

        let intent: PaymentIntent = response.json().await?;

        tracing::info!(amount_minor, "Payment intent created");
        Ok(intent.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minor_units_truncates() {
        assert_eq!(to_minor_units(10.0), 1000);
        assert_eq!(to_minor_units(35.5), 3550);
        // 19.99 * 100 lands just below 1999 in binary floating point
        assert_eq!(to_minor_units(19.99), 1998);
    }

    #[test]
    fn test_to_minor_units_passes_negative_through() {
        assert_eq!(to_minor_units(-1.0), -100);
    }

    #[test]
    fn test_stripe_config_from_env() {
        temp_env::with_var("STRIPE_SECRET_KEY", Some("sk_test_123"), || {
            let config = StripeConfig::from_env().unwrap();
            assert_eq!(config.secret_key, "sk_test_123");
        });
    }

    #[test]
    fn test_stripe_config_from_env_missing() {
        temp_env::with_var_unset("STRIPE_SECRET_KEY", || {
            assert!(StripeConfig::from_env().is_err());
        });
    }
}
