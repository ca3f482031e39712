//! HTTP handlers for the Analytics API

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::errors::responses::{
    ForbiddenResponse, InternalServerErrorResponse, UnauthorizedResponse,
};
use domain_users::RequireAdmin;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::AnalyticsResult;
use crate::models::{CategoryOrderStats, RevenueSummary};
use crate::repository::AnalyticsRepository;
use crate::service::AnalyticsService;

/// OpenAPI documentation for the Analytics API
#[derive(OpenApi)]
#[openapi(
    paths(admin_stats, order_stats),
    components(
        schemas(RevenueSummary, CategoryOrderStats),
        responses(
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Analytics", description = "Admin-gated sales reports")
    )
)]
pub struct ApiDoc;

/// Create the analytics router.
///
/// Spans two top-level paths, so the app merges this router instead of
/// nesting it.
pub fn router<R: AnalyticsRepository + 'static>(service: AnalyticsService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/admin-stats", get(admin_stats))
        .route("/order-stats", get(order_stats))
        .with_state(shared_service)
}

/// Global revenue total (admin only)
#[utoipa::path(
    get,
    path = "/admin-stats",
    tag = "Analytics",
    responses(
        (status = 200, description = "Revenue total", body = RevenueSummary),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn admin_stats<R: AnalyticsRepository>(
    State(service): State<Arc<AnalyticsService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
) -> AnalyticsResult<Json<RevenueSummary>> {
    let summary = service.revenue_summary().await?;
    Ok(Json(summary))
}

/// Per-category order breakdown (admin only)
#[utoipa::path(
    get,
    path = "/order-stats",
    tag = "Analytics",
    responses(
        (status = 200, description = "Per-category statistics", body = Vec<CategoryOrderStats>),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn order_stats<R: AnalyticsRepository>(
    State(service): State<Arc<AnalyticsService<R>>>,
    RequireAdmin(_claims): RequireAdmin,
) -> AnalyticsResult<Json<Vec<CategoryOrderStats>>> {
    let stats = service.order_stats().await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAnalyticsRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::JwtClaims;
    use domain_users::{Role, RoleGate};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn claims_for(email: &str) -> JwtClaims {
        JwtClaims {
            sub: email.to_string(),
            email: email.to_string(),
            name: None,
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_admin_stats_without_token_is_401() {
        let app = router(AnalyticsService::new(MockAnalyticsRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin-stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_stats_non_admin_is_403() {
        let app = router(AnalyticsService::new(MockAnalyticsRepository::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin-stats")
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
    async fn test_admin_stats_reports_revenue() {
        let mut repo = MockAnalyticsRepository::new();
        repo.expect_revenue_total().returning(|| Ok(35.5));

        let app = router(AnalyticsService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin-stats")
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["revenue"], 35.5);
    }

    #[tokio::test]
    async fn test_order_stats_returns_category_rows() {
        let mut repo = MockAnalyticsRepository::new();
        repo.expect_order_stats_by_category().returning(|| {
            Ok(vec![CategoryOrderStats {
                category: "pain".to_string(),
                quantity: 2,
                revenue: 12.0,
            }])
        });

        let app = router(AnalyticsService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/order-stats")
                    .extension(claims_for("root@example.com"))
                    .extension(RoleGate::fixed(Some(Role::Admin)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let stats: Vec<CategoryOrderStats> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(stats[0].quantity, 2);
        assert_eq!(stats[0].revenue, 12.0);
    }
}
