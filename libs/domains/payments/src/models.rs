use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Payment entity - represents a checkout record stored in MongoDB.
///
/// The line-item reference sets are fixed at creation; only `status` is
/// mutated afterwards, by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Buyer email
    pub email: String,
    /// Buyer display name
    pub name: Option<String>,
    /// Total charged amount
    pub price: f64,
    /// Processor transaction reference
    pub transaction_id: Option<String>,
    /// Free-form status, e.g. "pending", later mutated by an admin
    pub status: String,
    /// Cart rows swept after this payment
    pub cart_ids: Vec<Uuid>,
    /// Catalog items purchased, joined by the order-stats report
    pub medicine_item_ids: Vec<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for recording a payment
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RecordPayment {
    #[validate(email)]
    pub email: String,
    pub name: Option<String>,
    pub price: f64,
    pub transaction_id: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub cart_ids: Vec<Uuid>,
    #[serde(default)]
    pub medicine_item_ids: Vec<Uuid>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Composite result of recording a payment.
///
/// The payment persists regardless of the sweep outcome; a sweep failure
/// shows up as fewer removed rows than cart ids.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckoutResult {
    pub payment: Payment,
    /// Cart rows actually deleted by the post-payment sweep
    pub removed_cart_items: u64,
}

/// DTO for creating a payment intent
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIntent {
    /// Amount in major currency units; converted to cents for the processor
    pub price: f64,
}

/// Opaque client secret returned by the payment processor
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IntentSecret {
    pub client_secret: String,
}

/// DTO for the admin status update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentStatus {
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

impl Payment {
    /// Create a new payment record from a RecordPayment DTO
    pub fn new(input: RecordPayment) -> Self {
        Self {
            id: Uuid::now_v7(),
            email: input.email,
            name: input.name,
            price: input.price,
            transaction_id: input.transaction_id,
            status: input.status,
            cart_ids: input.cart_ids,
            medicine_item_ids: input.medicine_item_ids,
            created_at: Utc::now(),
        }
    }
}
