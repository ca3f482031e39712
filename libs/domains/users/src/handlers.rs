//! HTTP handlers for the Users API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    Authenticated, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::guard::RequireAdmin;
use crate::models::{AdminFlag, RegisterResult, RegisterUser, Role, SellerFlag, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        register,
        list_users,
        admin_flag,
        seller_flag,
        make_admin,
        make_seller,
        make_user,
        delete_user,
    ),
    components(
        schemas(User, RegisterUser, RegisterResult, AdminFlag, SellerFlag, Role),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User registration and role administration")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(register).get(list_users))
        // The GET side reads an email in the path, the PATCH side a user id;
        // both live under one template because axum requires a single
        // parameter name per path.
        .route("/admin/{id}", get(admin_flag).patch(make_admin))
        .route("/seller/{id}", get(seller_flag).patch(make_seller))
        .route("/user/{id}", patch(make_user))
        .route("/{id}", delete(delete_user))
        .with_state(shared_service)
}

/// Register a user (idempotent by email)
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = RegisterUser,
    responses(
        (status = 200, description = "Registered, or sentinel when the email already exists", body = RegisterResult),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn register<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<RegisterUser>,
) -> UserResult<Json<RegisterResult>> {
    let result = service.register(input).await?;
    Ok(Json(result))
}

/// List every user (admin only)
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Admin flag for the authenticated caller's own email
#[utoipa::path(
    get,
    path = "/admin/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Email address, must match the caller's token")
    ),
    responses(
        (status = 200, description = "Admin flag", body = AdminFlag),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_flag<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Authenticated(claims): Authenticated,
    Path(email): Path<String>,
) -> UserResult<Json<AdminFlag>> {
    if claims.email != email {
        return Err(UserError::Forbidden);
    }

    let admin = service.admin_flag(&email).await?;
    Ok(Json(AdminFlag { admin }))
}

/// Seller flag for the authenticated caller's own email
#[utoipa::path(
    get,
    path = "/seller/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "Email address, must match the caller's token")
    ),
    responses(
        (status = 200, description = "Seller flag", body = SellerFlag),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn seller_flag<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Authenticated(claims): Authenticated,
    Path(email): Path<String>,
) -> UserResult<Json<SellerFlag>> {
    if claims.email != email {
        return Err(UserError::Forbidden);
    }

    let seller = service.seller_flag(&email).await?;
    Ok(Json(SellerFlag { seller }))
}

/// Grant the admin role (admin only)
#[utoipa::path(
    patch,
    path = "/admin/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn make_admin<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.set_role(id, Role::Admin).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grant the seller role (admin only)
#[utoipa::path(
    patch,
    path = "/seller/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn make_seller<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.set_role(id, Role::Seller).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grant the plain user role (admin only)
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Role updated"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn make_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.set_role(id, Role::User).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::RoleGate;
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::JwtClaims;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn claims_for(email: &str) -> JwtClaims {
        JwtClaims {
            sub: email.to_string(),
            email: email.to_string(),
            name: None,
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        }
    }

    fn sample_user(email: &str, role: Option<Role>) -> User {
        User {
            id: Uuid::now_v7(),
            email: email.to_string(),
            name: "Sample".to_string(),
            role,
            created_at: chrono::Utc::now(),
        }
    }

    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_returns_inserted_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_insert().returning(Ok);

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"email":"new@example.com","name":"New"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: serde_json::Value = json_body(response.into_body()).await;
        assert!(result["inserted_id"].is_string());
    }

    #[tokio::test]
    async fn test_register_duplicate_returns_sentinel() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|email| Ok(Some(sample_user(email, None))));

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"email":"existing@example.com","name":"Dup"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result: serde_json::Value = json_body(response.into_body()).await;
        assert_eq!(result["inserted_id"], serde_json::Value::Null);
        assert_eq!(result["message"], "User already exists!");
    }

    #[tokio::test]
    async fn test_list_users_without_token_is_401() {
        let app = router(UserService::new(MockUserRepository::new()));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_list_users_non_admin_is_403() {
        let app = router(UserService::new(MockUserRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .extension(claims_for("user@example.com"))
                    .extension(RoleGate::fixed(Some(Role::User)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_list_users_admin_succeeds() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![sample_user("a@example.com", Some(Role::Admin))]));

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let users: Vec<User> = json_body(response.into_body()).await;
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_admin_flag_mismatched_email_is_403() {
        let app = router(UserService::new(MockUserRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/other@example.com")
                    .extension(claims_for("me@example.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_flag_self_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|email| Ok(Some(sample_user(email, Some(Role::Admin)))));

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/me@example.com")
                    .extension(claims_for("me@example.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let flag: serde_json::Value = json_body(response.into_body()).await;
        assert_eq!(flag["admin"], true);
    }

    #[tokio::test]
    async fn test_make_admin_missing_user_is_404() {
        let mut repo = MockUserRepository::new();
        repo.expect_set_role().returning(|_, _| Ok(0));

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/admin/{}", Uuid::now_v7()))
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_make_seller_succeeds() {
        let mut repo = MockUserRepository::new();
        repo.expect_set_role()
            .withf(|_, role| *role == Role::Seller)
            .returning(|_, _| Ok(1));

        let app = router(UserService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/seller/{}", Uuid::now_v7()))
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
