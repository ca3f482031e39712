//! MongoDB implementation of CartRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CartResult;
use crate::models::CartItem;
use crate::repository::CartRepository;

/// MongoDB implementation of the CartRepository
pub struct MongoCartRepository {
    collection: Collection<CartItem>,
}

impl MongoCartRepository {
    /// Create a new MongoCartRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<CartItem>("carts");
        Self { collection }
    }

    /// Create a new MongoCartRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<CartItem>(collection_name);
        Self { collection }
    }

    /// Initialize indexes.
    ///
    /// The merge-key index is NOT unique: the merge invariant is enforced by
    /// the add logic, and concurrent adds for the same key may still produce
    /// two rows. The index only serves the lookup.
    pub async fn init_indexes(&self) -> CartResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "medicine_id": 1, "buyer_email": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_medicine_buyer".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "buyer_email": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_buyer_email".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Cart indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[instrument(skip(self, item), fields(buyer_email = %item.buyer_email))]
    async fn insert(&self, item: CartItem) -> CartResult<CartItem> {
        self.collection.insert_one(&item).await?;

        tracing::info!(cart_id = %item.id, "Cart row created");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CartResult<Option<CartItem>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let item = self.collection.find_one(filter).await?;
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn find_by_medicine_and_buyer(
        &self,
        medicine_id: Uuid,
        buyer_email: &str,
    ) -> CartResult<Option<CartItem>> {
        let filter = doc! {
            "medicine_id": to_bson(&medicine_id).unwrap_or(Bson::Null),
            "buyer_email": buyer_email,
        };
        let item = self.collection.find_one(filter).await?;
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn list_for_buyer(&self, buyer_email: &str) -> CartResult<Vec<CartItem>> {
        use futures_util::TryStreamExt;

        let filter = doc! { "buyer_email": buyer_email };
        let cursor = self.collection.find(filter).await?;
        let items: Vec<CartItem> = cursor.try_collect().await?;

        Ok(items)
    }

    #[instrument(skip(self))]
    async fn increment_quantity(&self, id: Uuid, delta: i32) -> CartResult<u64> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let update = doc! { "$inc": { "quantity": delta } };

        let result = self.collection.update_one(filter, update).await?;
        Ok(result.modified_count)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CartResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        Ok(result.deleted_count > 0)
    }
}
