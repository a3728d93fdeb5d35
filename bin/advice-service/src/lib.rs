//! Reference Content Service for kind-words.
//!
//! Serves one random active advice item per request from an in-memory
//! catalog seeded from JSON.

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;

pub use catalog::{Advice, AdviceCatalog};
pub use config::ServiceConfig;
pub use error::CatalogError;
pub use routes::router;
