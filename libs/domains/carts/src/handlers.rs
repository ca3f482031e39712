//! HTTP handlers for the Carts API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CartResult;
use crate::models::{AddToCart, CartItem, CartMessage, DecreaseOutcome};
use crate::repository::CartRepository;
use crate::service::CartService;

/// OpenAPI documentation for the Carts API
#[derive(OpenApi)]
#[openapi(
    paths(list_cart, add_to_cart, increase_quantity, decrease_quantity, remove_item),
    components(
        schemas(CartItem, AddToCart, CartMessage),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Carts", description = "Per-buyer cart line items")
    )
)]
pub struct ApiDoc;

/// Create the carts router with all HTTP endpoints
pub fn router<R: CartRepository + 'static>(service: CartService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_cart).post(add_to_cart))
        .route("/increase/{id}", patch(increase_quantity))
        .route("/decrease/{id}", patch(decrease_quantity))
        .route("/{id}", delete(remove_item))
        .with_state(shared_service)
}

/// Buyer query parameters
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct BuyerQuery {
    /// Buyer email (not checked against caller identity)
    pub email: String,
}

/// List cart rows for a buyer
#[utoipa::path(
    get,
    path = "",
    tag = "Carts",
    params(BuyerQuery),
    responses(
        (status = 200, description = "Cart rows for the buyer", body = Vec<CartItem>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    Query(query): Query<BuyerQuery>,
) -> CartResult<Json<Vec<CartItem>>> {
    let items = service.list_for_buyer(&query.email).await?;
    Ok(Json(items))
}

/// Merge-add an item to a buyer's cart
#[utoipa::path(
    post,
    path = "",
    tag = "Carts",
    request_body = AddToCart,
    responses(
        (status = 200, description = "The merged or freshly created row", body = CartItem),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_to_cart<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    ValidatedJson(input): ValidatedJson<AddToCart>,
) -> CartResult<Json<CartItem>> {
    let item = service.add(input).await?;
    Ok(Json(item))
}

/// Increment a row's quantity by one.
///
/// A miss is reported as a message, not an error.
#[utoipa::path(
    patch,
    path = "/increase/{id}",
    tag = "Carts",
    params(
        ("id" = Uuid, Path, description = "Cart row ID")
    ),
    responses(
        (status = 200, description = "Outcome message", body = CartMessage),
        (status = 400, response = BadRequestUuidResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increase_quantity<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    UuidPath(id): UuidPath,
) -> CartResult<Json<CartMessage>> {
    let message = if service.increase(id).await? {
        "Quantity increased successfully"
    } else {
        "Failed to increase quantity"
    };

    Ok(Json(CartMessage {
        message: message.to_string(),
    }))
}

/// Decrement a row's quantity by one, removing the row at quantity 1
#[utoipa::path(
    patch,
    path = "/decrease/{id}",
    tag = "Carts",
    params(
        ("id" = Uuid, Path, description = "Cart row ID")
    ),
    responses(
        (status = 200, description = "Outcome message", body = CartMessage),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn decrease_quantity<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    UuidPath(id): UuidPath,
) -> CartResult<Json<CartMessage>> {
    let message = match service.decrease(id).await? {
        DecreaseOutcome::Decremented => "Quantity decreased successfully",
        DecreaseOutcome::Removed => "Item removed from cart",
    };

    Ok(Json(CartMessage {
        message: message.to_string(),
    }))
}

/// Unconditionally remove a row
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Carts",
    params(
        ("id" = Uuid, Path, description = "Cart row ID")
    ),
    responses(
        (status = 204, description = "Row removed"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_item<R: CartRepository>(
    State(service): State<Arc<CartService<R>>>,
    UuidPath(id): UuidPath,
) -> CartResult<impl IntoResponse> {
    service.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCartRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn json_body(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_cart_filters_by_buyer() {
        let mut repo = MockCartRepository::new();
        repo.expect_list_for_buyer()
            .withf(|email| email == "buyer@example.com")
            .returning(|_| Ok(vec![]));

        let app = router(CartService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?email=buyer%40example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_increase_missing_row_is_200_with_message() {
        let mut repo = MockCartRepository::new();
        repo.expect_increment_quantity().returning(|_, _| Ok(0));

        let app = router(CartService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/increase/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Failed to increase quantity");
    }

    #[tokio::test]
    async fn test_decrease_missing_row_is_404() {
        let mut repo = MockCartRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let app = router(CartService::new(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/decrease/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_merges_existing_row() {
        let medicine_id = Uuid::now_v7();
        let existing = CartItem {
            id: Uuid::now_v7(),
            medicine_id,
            buyer_email: "buyer@example.com".to_string(),
            seller_email: "seller@example.com".to_string(),
            name: "Paracetamol".to_string(),
            image: String::new(),
            price: 5.0,
            category: "pain".to_string(),
            quantity: 1,
            created_at: chrono::Utc::now(),
        };
        let merged = CartItem {
            quantity: 2,
            ..existing.clone()
        };

        let mut repo = MockCartRepository::new();
        repo.expect_find_by_medicine_and_buyer()
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_increment_quantity().returning(|_, _| Ok(1));
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(merged.clone())));

        let app = router(CartService::new(repo));
        let payload = serde_json::json!({
            "medicine_id": medicine_id,
            "buyer_email": "buyer@example.com",
            "seller_email": "seller@example.com",
            "name": "Paracetamol",
            "price": 5.0,
            "category": "pain"
        });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["quantity"], 2);
    }
}
