use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Cart line item - one row per (medicine, buyer) pair
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// The catalog item this row references
    pub medicine_id: Uuid,
    /// Buyer identity, the cart is keyed by this email
    pub buyer_email: String,
    /// Seller attribution carried over from the catalog item
    pub seller_email: String,
    /// Denormalized medicine name
    pub name: String,
    /// Denormalized image URL
    pub image: String,
    /// Denormalized unit price
    pub price: f64,
    /// Denormalized category
    pub category: String,
    /// Units in the cart, always >= 1 (a decrement at 1 deletes the row)
    pub quantity: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for the merge-add operation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddToCart {
    pub medicine_id: Uuid,
    #[validate(email)]
    pub buyer_email: String,
    #[validate(email)]
    pub seller_email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
}

/// Outcome of a decrement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity was above 1 and went down by one
    Decremented,
    /// Quantity was 1, so the row was deleted
    Removed,
}

/// Message-style response for the quantity endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartMessage {
    pub message: String,
}

impl CartItem {
    /// Create a fresh row with quantity 1 from an AddToCart DTO
    pub fn new(input: AddToCart) -> Self {
        Self {
            id: Uuid::now_v7(),
            medicine_id: input.medicine_id,
            buyer_email: input.buyer_email,
            seller_email: input.seller_email,
            name: input.name,
            image: input.image,
            price: input.price,
            category: input.category,
            quantity: 1,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn sample_add() -> AddToCart {
        AddToCart {
            medicine_id: Uuid::now_v7(),
            buyer_email: "buyer@example.com".to_string(),
            seller_email: "seller@example.com".to_string(),
            name: "Paracetamol".to_string(),
            image: String::new(),
            price: 5.0,
            category: "pain".to_string(),
        }
    }

    #[test]
    fn test_new_row_starts_at_quantity_one() {
        let item = CartItem::new(sample_add());
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_add_to_cart_rejects_invalid_buyer_email() {
        let mut input = sample_add();
        input.buyer_email = "not-an-email".to_string();
        assert!(input.validate().is_err());
    }
}
