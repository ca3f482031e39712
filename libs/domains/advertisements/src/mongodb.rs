//! MongoDB implementation of AdvertisementRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::AdvertisementResult;
use crate::models::{AdStatus, Advertisement};
use crate::repository::AdvertisementRepository;

/// MongoDB implementation of the AdvertisementRepository
pub struct MongoAdvertisementRepository {
    collection: Collection<Advertisement>,
}

impl MongoAdvertisementRepository {
    /// Create a new MongoAdvertisementRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Advertisement>("advertisements");
        Self { collection }
    }

    /// Create a new MongoAdvertisementRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Advertisement>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl AdvertisementRepository for MongoAdvertisementRepository {
    #[instrument(skip(self, ad), fields(ad_name = %ad.name))]
    async fn insert(&self, ad: Advertisement) -> AdvertisementResult<Advertisement> {
        self.collection.insert_one(&ad).await?;

        tracing::info!(ad_id = %ad.id, "Advertisement created");
        Ok(ad)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> AdvertisementResult<Vec<Advertisement>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let ads: Vec<Advertisement> = cursor.try_collect().await?;

        Ok(ads)
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Uuid, status: AdStatus) -> AdvertisementResult<u64> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let update = doc! { "$set": { "status": status.to_string() } };

        let result = self.collection.update_one(filter, update).await?;

        tracing::info!(ad_id = %id, %status, "Advertisement status change attempted");
        Ok(result.modified_count)
    }
}
