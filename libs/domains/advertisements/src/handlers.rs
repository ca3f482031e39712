//! HTTP handlers for the Advertisements API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AdvertisementResult;
use crate::models::{AdStatus, Advertisement, CreateAdvertisement, SetAdvertisementStatus};
use crate::repository::AdvertisementRepository;
use crate::service::AdvertisementService;

/// OpenAPI documentation for the Advertisements API
#[derive(OpenApi)]
#[openapi(
    paths(list_advertisements, create_advertisement, set_status),
    components(
        schemas(Advertisement, CreateAdvertisement, SetAdvertisementStatus, AdStatus),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Advertisements", description = "Promotional entries")
    )
)]
pub struct ApiDoc;

/// Create the advertisements router with all HTTP endpoints
pub fn router<R: AdvertisementRepository + 'static>(service: AdvertisementService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_advertisements).post(create_advertisement))
        .route("/{id}", patch(set_status))
        .with_state(shared_service)
}

/// List every advertisement
#[utoipa::path(
    get,
    path = "",
    tag = "Advertisements",
    responses(
        (status = 200, description = "All advertisements", body = Vec<Advertisement>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_advertisements<R: AdvertisementRepository>(
    State(service): State<Arc<AdvertisementService<R>>>,
) -> AdvertisementResult<Json<Vec<Advertisement>>> {
    let ads = service.list().await?;
    Ok(Json(ads))
}

/// Create a new advertisement
#[utoipa::path(
    post,
    path = "",
    tag = "Advertisements",
    request_body = CreateAdvertisement,
    responses(
        (status = 201, description = "Advertisement created", body = Advertisement),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_advertisement<R: AdvertisementRepository>(
    State(service): State<Arc<AdvertisementService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAdvertisement>,
) -> AdvertisementResult<impl IntoResponse> {
    let ad = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ad)))
}

/// Set an advertisement's status.
///
/// Anything outside {"used", "not used"} is a 400; an unknown id or an
/// unchanged status is a 404.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Advertisements",
    params(
        ("id" = Uuid, Path, description = "Advertisement ID")
    ),
    request_body = SetAdvertisementStatus,
    responses(
        (status = 200, description = "Status updated", body = AdStatus),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_status<R: AdvertisementRepository>(
    State(service): State<Arc<AdvertisementService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<SetAdvertisementStatus>,
) -> AdvertisementResult<Json<AdStatus>> {
    let status = service.set_status(id, &input.status).await?;
    Ok(Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAdvertisementRepository;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_set_status_invalid_value_is_400() {
        let app = router(AdvertisementService::new(
            MockAdvertisementRepository::new(),
        ));

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"status":"maybe"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_is_404() {
        let mut repo = MockAdvertisementRepository::new();
        repo.expect_set_status().returning(|_, _| Ok(0));

        let app = router(AdvertisementService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"status":"used"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_advertisement_is_201() {
        let mut repo = MockAdvertisementRepository::new();
        repo.expect_insert().returning(Ok);

        let app = router(AdvertisementService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Spring sale"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
