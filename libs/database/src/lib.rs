//! Database library providing the MongoDB connector and utilities.
//!
//! This library owns connection management for the document store: typed
//! configuration, a connector with startup retry, and health checks.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{connect_from_config, MongoConfig};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! let collection = db.collection::<Document>("medicines");
//! ```

pub mod common;
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
