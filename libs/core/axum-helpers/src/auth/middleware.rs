use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extract the bearer token from the `Authorization` header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// Optional JWT authentication middleware.
///
/// Decodes the bearer token when one is present and valid, attaching
/// [`JwtClaims`] to the request extensions. Requests without a usable token
/// pass through unauthenticated — gated handlers extract [`Authenticated`]
/// and short-circuit with 401 when the claims are absent.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, Router};
/// use axum_helpers::{optional_jwt_auth_middleware, JwtAuth};
///
/// let routes: Router = build_routes()
///     .layer(middleware::from_fn_with_state(jwt.clone(), optional_jwt_auth_middleware));
/// ```
pub async fn optional_jwt_auth_middleware(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_bearer_token(&headers) {
        match auth.verify_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(claims);
            }
            Err(e) => {
                tracing::debug!("JWT verification failed: {}", e);
            }
        }
    }

    next.run(request).await
}

/// Extractor asserting that the request carries verified claims.
///
/// This is the authentication gate: handlers that list it as a parameter
/// reject requests whose token was missing, malformed, or failed
/// verification with `401 Unauthorized`.
///
/// # Example
/// ```ignore
/// async fn list_payments(
///     Authenticated(claims): Authenticated,
/// ) -> PaymentResult<Json<Vec<Payment>>> {
///     // claims.email is the verified caller identity
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticated(pub JwtClaims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<JwtClaims>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                AppError::Unauthorized("unauthorized access".to_string()).into_response()
            })
    }
}
