//! Cart Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CartError, CartResult};
use crate::models::{AddToCart, CartItem, DecreaseOutcome};
use crate::repository::CartRepository;

/// Cart service providing business logic operations
///
/// The service layer owns the merge-on-add invariant and the
/// delete-at-quantity-one rule; the repository stays a thin data mapper.
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

impl<R: CartRepository> CartService<R> {
    /// Create a new CartService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Merge-add an item to a buyer's cart.
    ///
    /// An existing row for the same (medicine, buyer) pair is incremented by
    /// one; otherwise a fresh row with quantity 1 is inserted. The lookup
    /// and write are separate round trips, unguarded by any lock.
    #[instrument(skip(self, input), fields(buyer_email = %input.buyer_email))]
    pub async fn add(&self, input: AddToCart) -> CartResult<CartItem> {
        input
            .validate()
            .map_err(|e| CartError::Validation(e.to_string()))?;

        if let Some(existing) = self
            .repository
            .find_by_medicine_and_buyer(input.medicine_id, &input.buyer_email)
            .await?
        {
            self.repository.increment_quantity(existing.id, 1).await?;
            let merged = self
                .repository
                .get_by_id(existing.id)
                .await?
                .ok_or(CartError::NotFound(existing.id))?;
            return Ok(merged);
        }

        self.repository.insert(CartItem::new(input)).await
    }

    /// All cart rows for a buyer email
    #[instrument(skip(self))]
    pub async fn list_for_buyer(&self, buyer_email: &str) -> CartResult<Vec<CartItem>> {
        self.repository.list_for_buyer(buyer_email).await
    }

    /// Increment a row's quantity by one.
    ///
    /// Returns whether anything was modified; a miss is a no-op for the
    /// caller to report, not an error.
    #[instrument(skip(self))]
    pub async fn increase(&self, id: Uuid) -> CartResult<bool> {
        let modified = self.repository.increment_quantity(id, 1).await?;
        Ok(modified > 0)
    }

    /// Decrement a row's quantity by one, deleting the row at quantity 1.
    ///
    /// Quantity 0 is never persisted.
    #[instrument(skip(self))]
    pub async fn decrease(&self, id: Uuid) -> CartResult<DecreaseOutcome> {
        let item = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CartError::NotFound(id))?;

        if item.quantity > 1 {
            self.repository.increment_quantity(id, -1).await?;
            Ok(DecreaseOutcome::Decremented)
        } else {
            self.repository.delete(id).await?;
            Ok(DecreaseOutcome::Removed)
        }
    }

    /// Unconditionally remove a row
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> CartResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CartError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: CartRepository> Clone for CartService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCartRepository;
    use mockall::predicate::eq;

    fn sample_add() -> AddToCart {
        AddToCart {
            medicine_id: Uuid::now_v7(),
            buyer_email: "buyer@example.com".to_string(),
            seller_email: "seller@example.com".to_string(),
            name: "Paracetamol".to_string(),
            image: String::new(),
            price: 5.0,
            category: "pain".to_string(),
        }
    }

    fn row_with_quantity(input: &AddToCart, quantity: i32) -> CartItem {
        let mut item = CartItem::new(input.clone());
        item.quantity = quantity;
        item
    }

    #[tokio::test]
    async fn test_add_inserts_fresh_row() {
        let input = sample_add();

        let mut repo = MockCartRepository::new();
        repo.expect_find_by_medicine_and_buyer()
            .returning(|_, _| Ok(None));
        repo.expect_insert().returning(Ok);

        let service = CartService::new(repo);
        let item = service.add(input).await.unwrap();
        assert_eq!(item.quantity, 1);
    }

    #[tokio::test]
    async fn test_repeat_add_increments_instead_of_inserting() {
        let input = sample_add();
        let existing = row_with_quantity(&input, 1);
        let existing_id = existing.id;
        let merged = row_with_quantity(&input, 2);

        let medicine_id = input.medicine_id;
        let mut repo = MockCartRepository::new();
        repo.expect_find_by_medicine_and_buyer()
            .withf(move |id, email| *id == medicine_id && email == "buyer@example.com")
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_increment_quantity()
            .with(eq(existing_id), eq(1))
            .returning(|_, _| Ok(1));
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(merged.clone())));
        // No expect_insert: the merge must never create a second row.

        let service = CartService::new(repo);
        let item = service.add(input).await.unwrap();
        assert_eq!(item.quantity, 2);
    }

    #[tokio::test]
    async fn test_increase_reports_no_op_for_missing_row() {
        let mut repo = MockCartRepository::new();
        repo.expect_increment_quantity().returning(|_, _| Ok(0));

        let service = CartService::new(repo);
        assert!(!service.increase(Uuid::now_v7()).await.unwrap());
    }

    #[tokio::test]
    async fn test_decrease_missing_row_is_not_found() {
        let mut repo = MockCartRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = CartService::new(repo);
        let result = service.decrease(Uuid::now_v7()).await;
        assert!(matches!(result, Err(CartError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_decrease_above_one_decrements() {
        let input = sample_add();
        let existing = row_with_quantity(&input, 2);
        let existing_id = existing.id;

        let mut repo = MockCartRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_increment_quantity()
            .with(eq(existing_id), eq(-1))
            .returning(|_, _| Ok(1));
        // No expect_delete: the row must survive at quantity 1.

        let service = CartService::new(repo);
        let outcome = service.decrease(existing_id).await.unwrap();
        assert_eq!(outcome, DecreaseOutcome::Decremented);
    }

    #[tokio::test]
    async fn test_decrease_at_one_deletes_the_row() {
        let input = sample_add();
        let existing = row_with_quantity(&input, 1);
        let existing_id = existing.id;

        let mut repo = MockCartRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_delete()
            .with(eq(existing_id))
            .returning(|_| Ok(true));
        // No expect_increment_quantity: quantity 0 is never written.

        let service = CartService::new(repo);
        let outcome = service.decrease(existing_id).await.unwrap();
        assert_eq!(outcome, DecreaseOutcome::Removed);
    }

    #[tokio::test]
    async fn test_remove_missing_row_is_not_found() {
        let mut repo = MockCartRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = CartService::new(repo);
        let result = service.remove(Uuid::now_v7()).await;
        assert!(matches!(result, Err(CartError::NotFound(_))));
    }
}
