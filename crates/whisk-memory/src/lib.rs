//! # whisk-memory
//!
//! Persistent preference and activity store for whisk (SQLite-backed), plus
//! an in-process preference store.

pub mod activity;
pub mod memory;
pub mod store;

pub use activity::ActivityLogger;
pub use memory::MemoryPreferences;
pub use store::Store;
