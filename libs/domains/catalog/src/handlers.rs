//! HTTP handlers for the Catalog API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    UuidPath, ValidatedJson,
};
use domain_users::RequireAdmin;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MedicineResult;
use crate::models::{CreateMedicine, Medicine, UpdateMedicine};
use crate::repository::MedicineRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_medicines,
        create_medicine,
        get_medicine,
        update_medicine,
        delete_medicine,
    ),
    components(
        schemas(Medicine, CreateMedicine, UpdateMedicine),
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
        (name = "Catalog", description = "Medicine catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: MedicineRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_medicines).post(create_medicine))
        .route(
            "/{id}",
            get(get_medicine)
                .patch(update_medicine)
                .delete(delete_medicine),
        )
        .with_state(shared_service)
}

/// List the entire catalog
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    responses(
        (status = 200, description = "All medicines", body = Vec<Medicine>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_medicines<R: MedicineRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> MedicineResult<Json<Vec<Medicine>>> {
    let medicines = service.list_medicines().await?;
    Ok(Json(medicines))
}

/// Create a new medicine (admin only)
#[utoipa::path(
    post,
    path = "",
    tag = "Catalog",
    request_body = CreateMedicine,
    responses(
        (status = 201, description = "Medicine created successfully", body = Medicine),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_medicine<R: MedicineRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    ValidatedJson(input): ValidatedJson<CreateMedicine>,
) -> MedicineResult<impl IntoResponse> {
    let medicine = service.create_medicine(input).await?;
    Ok((StatusCode::CREATED, Json(medicine)))
}

/// Get a medicine by ID.
///
/// An unknown id answers 200 with a null body, not 404.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Medicine ID")
    ),
    responses(
        (status = 200, description = "The medicine, or null when absent", body = Option<Medicine>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_medicine<R: MedicineRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
) -> MedicineResult<Json<Option<Medicine>>> {
    let medicine = service.get_medicine(id).await?;
    Ok(Json(medicine))
}

/// Partially update a medicine.
///
/// Carries no auth gate in the current route set, unlike create/delete.
/// Only the fixed writable field set is merged; unknown fields are dropped.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Medicine ID")
    ),
    request_body = UpdateMedicine,
    responses(
        (status = 200, description = "Medicine updated successfully", body = Medicine),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_medicine<R: MedicineRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateMedicine>,
) -> MedicineResult<Json<Medicine>> {
    let medicine = service.update_medicine(id, input).await?;
    Ok(Json(medicine))
}

/// Delete a medicine (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = Uuid, Path, description = "Medicine ID")
    ),
    responses(
        (status = 204, description = "Medicine deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_medicine<R: MedicineRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
    UuidPath(id): UuidPath,
) -> MedicineResult<impl IntoResponse> {
    service.delete_medicine(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockMedicineRepository;
    use axum::body::Body;
    use axum::http::Request;
    use axum_helpers::JwtClaims;
    use domain_users::{Role, RoleGate};
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

    fn sample_medicine() -> Medicine {
        Medicine::new(CreateMedicine {
            name: "Ibuprofen".to_string(),
            category: "pain".to_string(),
            price: 7.0,
            quantity: 3,
            dosage: Some("200 mg".to_string()),
            image: "https://example.com/ibu.png".to_string(),
            short_description: None,
            seller_email: None,
        })
    }

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_unknown_medicine_returns_null_body() {
        let mut repo = MockMedicineRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let app = router(CatalogService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response.into_body()).await, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_create_without_token_is_401() {
        let app = router(CatalogService::new(MockMedicineRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"X","category":"pain","price":1.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_as_non_admin_is_403() {
        let app = router(CatalogService::new(MockMedicineRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .extension(claims_for("seller@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Seller)))
                    .body(Body::from(r#"{"name":"X","category":"pain","price":1.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_as_admin_is_201() {
        let mut repo = MockMedicineRepository::new();
        repo.expect_create()
            .returning(|input| Ok(Medicine::new(input)));

        let app = router(CatalogService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::from(r#"{"name":"X","category":"pain","price":1.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_update_needs_no_token() {
        let mut repo = MockMedicineRepository::new();
        let existing = sample_medicine();
        let id = existing.id;
        repo.expect_update().returning(move |_, input| {
            let mut updated = existing.clone();
            updated.apply_update(input);
            Ok(updated)
        });

        let app = router(CatalogService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/{}", id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"price": 9.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["price"], 9.0);
    }
}
