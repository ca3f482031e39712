//! Carts Domain
//!
//! This module provides a complete domain implementation for per-buyer cart
//! line items using MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The cart invariant is merge-on-add: repeated additions of the same
//! medicine by the same buyer collapse into a quantity increment instead of
//! creating duplicate rows. The merge is a read-then-write sequence with no
//! transaction or unique index behind it, so two concurrent adds for the
//! same `(medicine_id, buyer_email)` pair can still race into two rows.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CartError, CartResult};
pub use handlers::ApiDoc;
pub use models::{AddToCart, CartItem, DecreaseOutcome};
pub use mongodb::MongoCartRepository;
pub use repository::CartRepository;
pub use service::CartService;
