use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::CartItem;

/// Repository trait for CartItem persistence
///
/// This trait defines the data access interface for cart rows.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert a new cart row
    async fn insert(&self, item: CartItem) -> CartResult<CartItem>;

    /// Get a cart row by ID
    async fn get_by_id(&self, id: Uuid) -> CartResult<Option<CartItem>>;

    /// Find the row for a (medicine, buyer) merge key
    async fn find_by_medicine_and_buyer(
        &self,
        medicine_id: Uuid,
        buyer_email: &str,
    ) -> CartResult<Option<CartItem>>;

    /// All rows for a buyer email
    async fn list_for_buyer(&self, buyer_email: &str) -> CartResult<Vec<CartItem>>;

    /// Adjust a row's quantity by delta, returning the modified count
    async fn increment_quantity(&self, id: Uuid, delta: i32) -> CartResult<u64>;

    /// Delete a row by ID, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> CartResult<bool>;
}
