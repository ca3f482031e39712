use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Advertisement status - exactly two values on the wire
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
    ToSchema,
)]
pub enum AdStatus {
    /// Currently shown on the storefront
    #[serde(rename = "used")]
    #[strum(serialize = "used")]
    Used,
    /// Not currently shown
    #[default]
    #[serde(rename = "not used")]
    #[strum(serialize = "not used")]
    NotUsed,
}

/// Advertisement entity - represents a promotional entry stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Advertisement {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Advertised medicine or campaign name
    pub name: String,
    /// Banner image URL
    pub image: String,
    /// Promotional copy
    pub description: String,
    /// Seller attribution
    pub seller_email: Option<String>,
    /// Whether the entry is currently in use
    pub status: AdStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating an advertisement
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAdvertisement {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[validate(email)]
    pub seller_email: Option<String>,
}

/// DTO for the status toggle.
///
/// The status arrives as a plain string so that values outside the enum can
/// be rejected with a 400 instead of a body-rejection.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SetAdvertisementStatus {
    /// Either "used" or "not used"
    pub status: String,
}

impl Advertisement {
    /// Create a new advertisement from a CreateAdvertisement DTO
    pub fn new(input: CreateAdvertisement) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            image: input.image,
            description: input.description,
            seller_email: input.seller_email,
            status: AdStatus::NotUsed,
            created_at: Utc::now(),
        }
    }
}
