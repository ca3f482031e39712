//! Payment Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{PaymentError, PaymentResult};
use crate::models::{CheckoutResult, Payment, RecordPayment};
use crate::repository::PaymentRepository;
use crate::stripe::{to_minor_units, StripeClient};

/// Payment service providing business logic operations
///
/// Orchestrates the payment processor and the repository. Recording a
/// payment is never rolled back: the cart sweep that follows it is
/// best-effort and its outcome is only reported.
pub struct PaymentService<R: PaymentRepository> {
    repository: Arc<R>,
    stripe: Arc<StripeClient>,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Create a new PaymentService with the given repository and processor client
    pub fn new(repository: R, stripe: StripeClient) -> Self {
        Self {
            repository: Arc::new(repository),
            stripe: Arc::new(stripe),
        }
    }

    /// Create a payment intent with the processor.
    ///
    /// The amount is converted to minor units with truncation. There is no
    /// lower bound here; amounts the processor refuses come back as its own
    /// error.
    #[instrument(skip(self))]
    pub async fn create_intent(&self, price: f64) -> PaymentResult<String> {
        self.stripe
            .create_payment_intent(to_minor_units(price))
            .await
    }

    /// Record a payment, then sweep the paid cart rows.
    ///
    /// The sweep runs after the insert and its failure does not undo the
    /// payment; it is logged and reported as zero removed rows.
    #[instrument(skip(self, input), fields(buyer_email = %input.email))]
    pub async fn record(&self, input: RecordPayment) -> PaymentResult<CheckoutResult> {
        input
            .validate()
            .map_err(|e| PaymentError::Validation(e.to_string()))?;

        let payment = self.repository.insert(Payment::new(input)).await?;

        let removed_cart_items = match self.repository.delete_cart_items(&payment.cart_ids).await {
            Ok(removed) => removed,
            Err(e) => {
                tracing::warn!(payment_id = %payment.id, "Cart sweep failed: {}", e);
                0
            }
        };

        Ok(CheckoutResult {
            payment,
            removed_cart_items,
        })
    }

    /// Update a payment's status (admin action).
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: Uuid, status: &str) -> PaymentResult<()> {
        let modified = self.repository.set_status(id, status).await?;
        if modified == 0 {
            return Err(PaymentError::NotFound(id));
        }
        Ok(())
    }

    /// List every payment
    #[instrument(skip(self))]
    pub async fn list_payments(&self) -> PaymentResult<Vec<Payment>> {
        self.repository.list().await
    }

    /// List payments for a buyer email
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, email: &str) -> PaymentResult<Vec<Payment>> {
        self.repository.list_for_email(email).await
    }
}

impl<R: PaymentRepository> Clone for PaymentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            stripe: Arc::clone(&self.stripe),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockPaymentRepository;
    use crate::stripe::StripeConfig;

    fn stripe() -> StripeClient {
        StripeClient::new(&StripeConfig::new("sk_test_dummy"))
    }

    fn record_input(cart_ids: Vec<Uuid>) -> RecordPayment {
        RecordPayment {
            email: "buyer@example.com".to_string(),
            name: None,
            price: 35.5,
            transaction_id: Some("pi_123".to_string()),
            status: "pending".to_string(),
            cart_ids,
            medicine_item_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_record_reports_swept_rows() {
        let cart_ids = vec![Uuid::now_v7(), Uuid::now_v7()];

        let mut repo = MockPaymentRepository::new();
        repo.expect_insert().returning(Ok);
        repo.expect_delete_cart_items().returning(|ids| Ok(ids.len() as u64));

        let service = PaymentService::new(repo, stripe());
        let result = service.record(record_input(cart_ids)).await.unwrap();

        assert_eq!(result.removed_cart_items, 2);
        assert_eq!(result.payment.status, "pending");
    }

    #[tokio::test]
    async fn test_record_survives_sweep_failure() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_insert().returning(Ok);
        repo.expect_delete_cart_items()
            .returning(|_| Err(PaymentError::Database("boom".to_string())));

        let service = PaymentService::new(repo, stripe());
        let result = service
            .record(record_input(vec![Uuid::now_v7()]))
            .await
            .unwrap();

        // The payment record stands even though the sweep failed.
        assert_eq!(result.removed_cart_items, 0);
    }

    #[tokio::test]
    async fn test_update_status_missing_payment_is_not_found() {
        let mut repo = MockPaymentRepository::new();
        repo.expect_set_status().returning(|_, _| Ok(0));

        let service = PaymentService::new(repo, stripe());
        let result = service.update_status(Uuid::now_v7(), "paid").await;

        assert!(matches!(result, Err(PaymentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_record_rejects_invalid_email() {
        let repo = MockPaymentRepository::new();
        let service = PaymentService::new(repo, stripe());

        let mut input = record_input(vec![]);
        input.email = "nope".to_string();

        let result = service.record(input).await;
        assert!(matches!(result, Err(PaymentError::Validation(_))));
    }
}
