//! Content Service boundary for kind-words.
//!
//! This crate provides:
//!
//! - **Wire types**: the advice item and query shapes of `GET /api/advice/`
//! - **Advice source**: the trait the dialog depends on, plus an HTTP client

pub mod config;
pub mod error;
pub mod item;
pub mod source;

pub use config::ContentConfig;
pub use error::{ContentError, FetchError};
pub use item::{AdviceItem, AdviceQuery};
pub use source::{AdviceSource, HttpAdviceSource};
