//! Catalog Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{MedicineError, MedicineResult};
use crate::models::{CreateMedicine, Medicine, UpdateMedicine};
use crate::repository::MedicineRepository;

/// Catalog service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations.
pub struct CatalogService<R: MedicineRepository> {
    repository: Arc<R>,
}

impl<R: MedicineRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new medicine
    #[instrument(skip(self, input), fields(medicine_name = %input.name))]
    pub async fn create_medicine(&self, input: CreateMedicine) -> MedicineResult<Medicine> {
        input
            .validate()
            .map_err(|e| MedicineError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a medicine by ID.
    ///
    /// A missing id is not an error here: the read endpoint answers with a
    /// null body for unknown ids.
    #[instrument(skip(self))]
    pub async fn get_medicine(&self, id: Uuid) -> MedicineResult<Option<Medicine>> {
        self.repository.get_by_id(id).await
    }

    /// List the entire catalog
    #[instrument(skip(self))]
    pub async fn list_medicines(&self) -> MedicineResult<Vec<Medicine>> {
        self.repository.list().await
    }

    /// Partially update an existing medicine
    #[instrument(skip(self, input))]
    pub async fn update_medicine(
        &self,
        id: Uuid,
        input: UpdateMedicine,
    ) -> MedicineResult<Medicine> {
        input
            .validate()
            .map_err(|e| MedicineError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a medicine.
    ///
    /// Carts referencing the medicine are left untouched; dangling
    /// references are possible.
    #[instrument(skip(self))]
    pub async fn delete_medicine(&self, id: Uuid) -> MedicineResult<()> {
        if !self.repository.delete(id).await? {
            return Err(MedicineError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: MedicineRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
