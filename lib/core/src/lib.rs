//! Core domain types and utilities for kind-words.
//!
//! This crate provides the foundational types shared by the chat front-end
//! and the Content Service: error handling, identifiers, and the category set.

pub mod category;
pub mod error;
pub mod id;

pub use category::{Category, UnknownCategory};
pub use error::Result;
pub use id::{AdviceId, ChatUserId, ParseIdError};
