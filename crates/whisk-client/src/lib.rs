//! # whisk-client
//!
//! Remote action service client for the OpenWhisk control plane.

mod client;


pub use client::WhiskClient;
