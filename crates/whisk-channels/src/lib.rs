//! # whisk-channels
//!
//! Chat surfaces for whisk.

pub mod console;

pub use console::ConsoleChannel;
