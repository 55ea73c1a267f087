//! Database models shared across the repository layer.

pub mod client;
pub mod config;
