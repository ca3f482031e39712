//! Token issuance endpoint.
//!
//! Signs whatever identity the caller submits: issuance is not itself an
//! authentication event here; the identity step that vouches for the email
//! lives outside this service.

use axum::{extract::State, routing::post, Json, Router};
use axum_helpers::{AppError, JwtAuth, ValidatedJson};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use validator::Validate;

use crate::state::AppState;

/// Caller-supplied identity claims to sign
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
}

/// Signed token, valid for one hour
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// OpenAPI documentation for token issuance
#[derive(OpenApi)]
#[openapi(
    paths(issue_token),
    components(schemas(TokenRequest, TokenResponse)),
    tags(
        (name = "Auth", description = "Token issuance")
    )
)]
pub struct ApiDoc;

/// Create the token issuance router
pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/", post(issue_token))
        .with_state(state.jwt.clone())
}

/// Sign the submitted identity into a one-hour token
#[utoipa::path(
    post,
    path = "",
    tag = "Auth",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 400, description = "Validation failure"),
        (status = 500, description = "Signing failure")
    )
)]
async fn issue_token(
    State(jwt): State<JwtAuth>,
    ValidatedJson(input): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = jwt
        .issue_token(&input.email, input.name.as_deref())
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    Ok(Json(TokenResponse { token }))
}
