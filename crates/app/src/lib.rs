//! Shared application modules for the oracle API.

pub mod auth;
pub mod server;
