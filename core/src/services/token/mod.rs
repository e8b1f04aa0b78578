//! Token service module for session token management
//!
//! This module handles all token-related operations:
//! - Signed session token issuance
//! - Token validation and subject extraction
//! - Signing configuration and startup validation

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
