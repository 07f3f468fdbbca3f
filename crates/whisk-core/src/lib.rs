//! # whisk-core
//!
//! Core types, traits, configuration, and error handling for the whisk bot.

pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod resolver;
pub mod sanitize;
pub mod traits;

pub use config::shellexpand;
