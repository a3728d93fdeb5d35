//! Menu-driven dialog for kind-words.
//!
//! This crate provides:
//!
//! - **Sessions**: per-user menu state with per-user serialization
//! - **State machine**: a pure transition table over parsed inputs
//! - **Advice fetcher**: Content Service calls that always yield something to show
//! - **Controller**: the entry point that turns a chat message into a reply
//!
//! It knows nothing about the messenger; the bot binary adapts [`Reply`]
//! and [`Keyboard`] to the chat API.

pub mod category;
pub mod controller;
pub mod fetcher;
pub mod input;
pub mod keyboard;
pub mod machine;
pub mod reply;
pub mod session;
pub mod smalltalk;

pub use category::CategorySelection;
pub use controller::{DialogController, Incoming};
pub use fetcher::{
    AdviceFetcher, AdviceOutcome, AdviceResult, DEFAULT_FETCH_TIMEOUT, FallbackContext,
};
pub use input::Input;
pub use keyboard::Keyboard;
pub use machine::{Action, Notice, Step, transition};
pub use reply::{Reply, TextFormat};
pub use session::{DialogState, Session, SessionStore};
pub use smalltalk::SmalltalkTopic;
