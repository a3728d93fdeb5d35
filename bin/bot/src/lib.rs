//! kind-words Telegram bot.
//!
//! Wires the dialog controller to Telegram and carries the bot's
//! configuration.

pub mod config;
pub mod telegram;
