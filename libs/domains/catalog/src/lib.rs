//! Catalog Domain
//!
//! This module provides a complete domain implementation for managing the
//! medicine catalog using MongoDB.
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
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, mongodb::MongoMedicineRepository, service::CatalogService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("medihealth");
//!
//! let repository = MongoMedicineRepository::new(&db);
//! let service = CatalogService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{MedicineError, MedicineResult};
pub use handlers::ApiDoc;
pub use models::{CreateMedicine, Medicine, UpdateMedicine};
pub use mongodb::MongoMedicineRepository;
pub use repository::MedicineRepository;
pub use service::CatalogService;
