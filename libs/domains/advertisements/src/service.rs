//! Advertisement Service - Business logic layer

use std::str::FromStr;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AdvertisementError, AdvertisementResult};
use crate::models::{AdStatus, Advertisement, CreateAdvertisement};
use crate::repository::AdvertisementRepository;

/// Advertisement service providing business logic operations
pub struct AdvertisementService<R: AdvertisementRepository> {
    repository: Arc<R>,
}

impl<R: AdvertisementRepository> AdvertisementService<R> {
    /// Create a new AdvertisementService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new advertisement
    #[instrument(skip(self, input), fields(ad_name = %input.name))]
    pub async fn create(&self, input: CreateAdvertisement) -> AdvertisementResult<Advertisement> {
        input
            .validate()
            .map_err(|e| AdvertisementError::Validation(e.to_string()))?;

        self.repository.insert(Advertisement::new(input)).await
    }

    /// List every advertisement
    #[instrument(skip(self))]
    pub async fn list(&self) -> AdvertisementResult<Vec<Advertisement>> {
        self.repository.list().await
    }

    /// Toggle an advertisement's status.
    ///
    /// Values outside the two-value enum are a validation failure; an
    /// unknown id or an unchanged status both report not-found.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: Uuid, status: &str) -> AdvertisementResult<AdStatus> {
        let status = AdStatus::from_str(status).map_err(|_| {
            AdvertisementError::Validation(format!(
                "Invalid status '{}': expected \"used\" or \"not used\"",
                status
            ))
        })?;

        let modified = self.repository.set_status(id, status).await?;
        if modified == 0 {
            return Err(AdvertisementError::NotFound(id));
        }

        Ok(status)
    }
}

impl<R: AdvertisementRepository> Clone for AdvertisementService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
