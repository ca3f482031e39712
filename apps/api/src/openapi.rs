//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediHealth API",
        version = "0.1.0",
        description = "REST backend for the MediHealth medicine ordering platform"
    ),
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    nest(
        (path = "/medicine", api = domain_catalog::ApiDoc),
        (path = "/carts", api = domain_carts::ApiDoc),
        (path = "/jwt", api = crate::api::auth::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/advertisement", api = domain_advertisements::ApiDoc),
        (path = String::new(), api = domain_payments::ApiDoc),
        (path = String::new(), api = domain_analytics::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Medicine catalog endpoints"),
        (name = "Carts", description = "Per-buyer cart line items"),
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "User registration and role administration"),
        (name = "Payments", description = "Checkout and payment records"),
        (name = "Advertisements", description = "Promotional entries"),
        (name = "Analytics", description = "Admin-gated sales reports")
    )
)]
pub struct ApiDoc;
