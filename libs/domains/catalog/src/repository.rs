use async_trait::async_trait;
use uuid::Uuid;

use crate::error::MedicineResult;
use crate::models::{CreateMedicine, Medicine, UpdateMedicine};

/// Repository trait for Medicine persistence
///
/// This trait defines the data access interface for catalog items.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MedicineRepository: Send + Sync {
    /// Create a new medicine
    async fn create(&self, input: CreateMedicine) -> MedicineResult<Medicine>;

    /// Get a medicine by ID
    async fn get_by_id(&self, id: Uuid) -> MedicineResult<Option<Medicine>>;

    /// List the entire catalog, no pagination
    async fn list(&self) -> MedicineResult<Vec<Medicine>>;

    /// Partially update an existing medicine
    async fn update(&self, id: Uuid, input: UpdateMedicine) -> MedicineResult<Medicine>;

    /// Delete a medicine by ID
    async fn delete(&self, id: Uuid) -> MedicineResult<bool>;
}
