//! MongoDB implementation of MedicineRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{MedicineError, MedicineResult};
use crate::models::{CreateMedicine, Medicine, UpdateMedicine};
use crate::repository::MedicineRepository;

/// MongoDB implementation of the MedicineRepository
pub struct MongoMedicineRepository {
    collection: Collection<Medicine>,
}

impl MongoMedicineRepository {
    /// Create a new MongoMedicineRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Medicine>("medicines");
        Self { collection }
    }

    /// Create a new MongoMedicineRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Medicine>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl MedicineRepository for MongoMedicineRepository {
    #[instrument(skip(self, input), fields(medicine_name = %input.name))]
    async fn create(&self, input: CreateMedicine) -> MedicineResult<Medicine> {
        let medicine = Medicine::new(input);

        self.collection.insert_one(&medicine).await?;

        tracing::info!(medicine_id = %medicine.id, "Medicine created successfully");
        Ok(medicine)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> MedicineResult<Option<Medicine>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let medicine = self.collection.find_one(filter).await?;
        Ok(medicine)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> MedicineResult<Vec<Medicine>> {
        use futures_util::TryStreamExt;

        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let medicines: Vec<Medicine> = cursor.try_collect().await?;

        Ok(medicines)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateMedicine) -> MedicineResult<Medicine> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(MedicineError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(medicine_id = %id, "Medicine updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> MedicineResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(medicine_id = %id, "Medicine deleted successfully");
        Ok(true)
    }
}
