//! Payments Domain
//!
//! This module provides a complete domain implementation for checkout:
//! payment-intent creation against Stripe, payment record persistence, the
//! best-effort post-payment cart sweep, status administration, and per-user
//! and global listings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────────┐
//! │   Service   │ ──► │ StripeClient │  ← payment-intent creation
//! └──────┬──────┘     └──────────────┘
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
//! Recording a payment and sweeping the paid cart rows are two separate
//! writes with no transaction between them: a failed sweep is logged and
//! surfaced in the composite result, never rolled back.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod stripe;

// Re-export commonly used types
pub use error::{PaymentError, PaymentResult};
pub use handlers::ApiDoc;
pub use models::{
    CheckoutResult, CreateIntent, IntentSecret, Payment, RecordPayment, UpdatePaymentStatus,
};
pub use mongodb::MongoPaymentRepository;
pub use repository::PaymentRepository;
pub use service::PaymentService;
pub use stripe::{StripeClient, StripeConfig};
