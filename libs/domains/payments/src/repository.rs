use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PaymentResult;
use crate::models::Payment;

/// Repository trait for Payment persistence.
///
/// The cart sweep lives here too: after a checkout the paid cart rows are
/// deleted by id, which needs no knowledge of the cart row shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert a new payment record
    async fn insert(&self, payment: Payment) -> PaymentResult<Payment>;

    /// List every payment
    async fn list(&self) -> PaymentResult<Vec<Payment>>;

    /// List payments for a buyer email
    async fn list_for_email(&self, email: &str) -> PaymentResult<Vec<Payment>>;

    /// Set a payment's status, returning the modified count
    async fn set_status(&self, id: Uuid, status: &str) -> PaymentResult<u64>;

    /// Delete cart rows by id, returning the deleted count
    async fn delete_cart_items(&self, ids: &[Uuid]) -> PaymentResult<u64>;
}
