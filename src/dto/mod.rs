//! DTO modules that bridge the HTTP boundary with the service layer.

pub mod client;
