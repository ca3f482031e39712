use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AdvertisementResult;
use crate::models::{AdStatus, Advertisement};

/// Repository trait for Advertisement persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    /// Insert a new advertisement
    async fn insert(&self, ad: Advertisement) -> AdvertisementResult<Advertisement>;

    /// List every advertisement
    async fn list(&self) -> AdvertisementResult<Vec<Advertisement>>;

    /// Set an advertisement's status, returning the modified count
    async fn set_status(&self, id: Uuid, status: AdStatus) -> AdvertisementResult<u64>;
}
