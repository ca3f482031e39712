//! MongoDB implementation of PaymentRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson, Document},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::PaymentResult;
use crate::models::Payment;
use crate::repository::PaymentRepository;

/// MongoDB implementation of the PaymentRepository.
///
/// Holds the carts collection as untyped documents: the sweep only matches
/// by id and never reads row contents.
pub struct MongoPaymentRepository {
    payments: Collection<Payment>,
    carts: Collection<Document>,
}

impl MongoPaymentRepository {
    /// Create a new MongoPaymentRepository
    pub fn new(db: &Database) -> Self {
        Self {
            payments: db.collection::<Payment>("payments"),
            carts: db.collection::<Document>("carts"),
        }
    }
}

#[async_trait]
impl PaymentRepository for MongoPaymentRepository {
    #[instrument(skip(self, payment), fields(buyer_email = %payment.email))]
    async fn insert(&self, payment: Payment) -> PaymentResult<Payment> {
        self.payments.insert_one(&payment).await?;

        tracing::info!(payment_id = %payment.id, "Payment recorded");
        Ok(payment)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> PaymentResult<Vec<Payment>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .payments
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let payments: Vec<Payment> = cursor.try_collect().await?;

        Ok(payments)
    }

    #[instrument(skip(self))]
    async fn list_for_email(&self, email: &str) -> PaymentResult<Vec<Payment>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "email": email };
        let cursor = self.payments.find(filter).await?;
        let payments: Vec<Payment> = cursor.try_collect().await?;

        Ok(payments)
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: &str) -> PaymentResult<u64> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let update = doc! { "$set": { "status": status } };

        let result = self.payments.update_one(filter, update).await?;

        tracing::info!(payment_id = %id, status, "Payment status change attempted");
        Ok(result.modified_count)
    }

    #[instrument(skip(self, ids), fields(cart_ids = ids.len()))]
    async fn delete_cart_items(&self, ids: &[Uuid]) -> PaymentResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let id_strings: Vec<String> = ids.iter().map(Uuid::to_string).collect();
        let filter = doc! { "_id": { "$in": id_strings } };
        let result = self.carts.delete_many(filter).await?;

        tracing::info!(deleted = result.deleted_count, "Cart rows swept after payment");
        Ok(result.deleted_count)
    }
}
