//! Edit Guardian - Telegram bot that removes edited group messages.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - MongoDB chat directory
//! - `platform` - Outbound Telegram operations behind a trait
//! - `bot` - Dispatcher, shared state and polling runtime
//! - `plugins` - Command and callback handlers
//! - `events` - Edited message guard
//! - `health` - Liveness endpoint
//! - `utils` - Utility functions

pub mod bot;
pub mod config;
pub mod database;
pub mod events;
pub mod health;
pub mod platform;
pub mod plugins;
pub mod utils;
