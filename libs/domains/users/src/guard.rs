//! Role-based authorization gate.
//!
//! Authentication (token verification) lives in `axum-helpers`; this module
//! adds the authorization half, which has to consult the users collection:
//! a token only proves an identity, the stored `role` field decides what
//! that identity may do.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, JwtClaims};
use std::sync::Arc;

use crate::error::UserResult;
use crate::models::Role;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Role lookup backed by the users domain.
#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// The stored role for an email, `None` when the user is absent or
    /// carries no role.
    async fn role_of(&self, email: &str) -> UserResult<Option<Role>>;
}

#[async_trait]
impl<R: UserRepository> RoleLookup for UserService<R> {
    async fn role_of(&self, email: &str) -> UserResult<Option<Role>> {
        UserService::role_of(self, email).await
    }
}

/// Cloneable handle to the role lookup, installed as a request extension at
/// router construction time so that any domain's handlers can gate on roles
/// without depending on a concrete repository type.
#[derive(Clone)]
pub struct RoleGate {
    inner: Arc<dyn RoleLookup>,
}

impl RoleGate {
    pub fn new(lookup: impl RoleLookup + 'static) -> Self {
        Self {
            inner: Arc::new(lookup),
        }
    }

    /// Gate that answers a fixed role regardless of email.
    ///
    /// Intended for handler tests that run without a user store.
    pub fn fixed(role: Option<Role>) -> Self {
        struct FixedRole(Option<Role>);

        #[async_trait]
        impl RoleLookup for FixedRole {
            async fn role_of(&self, _email: &str) -> UserResult<Option<Role>> {
                Ok(self.0)
            }
        }

        Self::new(FixedRole(role))
    }

    pub async fn role_of(&self, email: &str) -> UserResult<Option<Role>> {
        self.inner.role_of(email).await
    }
}

/// Extractor asserting that the caller is an authenticated admin.
///
/// Runs after the JWT middleware: missing or unverified claims yield
/// `401 Unauthorized`; verified claims whose stored role is anything but
/// `admin` yield `403 Forbidden`.
///
/// # Example
/// ```ignore
/// async fn delete_medicine(
///     RequireAdmin(claims): RequireAdmin,
///     UuidPath(id): UuidPath,
/// ) -> MedicineResult<impl IntoResponse> { /* ... */ }
/// ```
pub struct RequireAdmin(pub JwtClaims);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<JwtClaims>().cloned().ok_or_else(|| {
            AppError::Unauthorized("unauthorized access".to_string()).into_response()
        })?;

        let gate = parts.extensions.get::<RoleGate>().cloned().ok_or_else(|| {
            AppError::InternalServerError("role gate not installed".to_string()).into_response()
        })?;

        match gate.role_of(&claims.email).await {
            Ok(Some(Role::Admin)) => Ok(RequireAdmin(claims)),
            Ok(_) => Err(AppError::Forbidden("forbidden access".to_string()).into_response()),
            Err(e) => {
                let app_error: AppError = e.into();
                Err(app_error.into_response())
            }
        }
    }
}
