use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token time-to-live: one hour
pub const TOKEN_TTL_SECS: i64 = 3600;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,          // Subject (user email)
    pub email: String,        // User email
    pub name: Option<String>, // User display name
    pub exp: i64,             // Expiration time
    pub iat: i64,             // Issued at
}

/// Stateless JWT authentication.
///
/// Signs and verifies HS256 tokens with a shared secret. Token issuance
/// trusts the identity the caller submits; the real authentication boundary
/// is an external identity step in front of this service.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    /// Create a new JWT auth instance.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Sign a token for the submitted identity with a one-hour expiry.
    pub fn issue_token(&self, email: &str, name: Option<&str>) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: email.to_string(),
            email: email.to_string(),
            name: name.map(str::to_string),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verify a token's signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret"))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let auth = auth();
        let token = auth.issue_token("buyer@example.com", Some("Buyer")).unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "buyer@example.com");
        assert_eq!(claims.email, "buyer@example.com");
        assert_eq!(claims.name.as_deref(), Some("Buyer"));
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = auth().issue_token("buyer@example.com", None).unwrap();

        let other = JwtAuth::new(&JwtConfig::new("different-secret"));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(auth().verify_token("not-a-token").is_err());
    }
}
