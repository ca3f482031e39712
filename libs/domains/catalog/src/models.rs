use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Medicine entity - represents a catalog item stored in MongoDB
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Medicine {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Medicine name
    pub name: String,
    /// Free-form category label (used by the order-stats breakdown)
    pub category: String,
    /// Unit price
    pub price: f64,
    /// Units available
    #[serde(default)]
    pub quantity: i32,
    /// Dosage description, e.g. "500 mg"
    pub dosage: Option<String>,
    /// Image URL
    pub image: String,
    /// Short description shown in listings
    pub short_description: Option<String>,
    /// Seller attribution (present but not access-enforced)
    pub seller_email: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new medicine
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMedicine {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: i32,
    pub dosage: Option<String>,
    #[serde(default)]
    pub image: String,
    pub short_description: Option<String>,
    #[validate(email)]
    pub seller_email: Option<String>,
}

/// DTO for partially updating a medicine.
///
/// Only this fixed field set is writable through the update endpoint;
/// anything else in the request body is dropped at deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMedicine {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub dosage: Option<String>,
    pub image: Option<String>,
    pub short_description: Option<String>,
}

impl Medicine {
    /// Create a new medicine from a CreateMedicine DTO
    pub fn new(input: CreateMedicine) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
            dosage: input.dosage,
            image: input.image,
            short_description: input.short_description,
            seller_email: input.seller_email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateMedicine DTO
    pub fn apply_update(&mut self, update: UpdateMedicine) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(dosage) = update.dosage {
            self.dosage = Some(dosage);
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(short_description) = update.short_description {
            self.short_description = Some(short_description);
        }
        self.updated_at = Utc::now();
    }
}
