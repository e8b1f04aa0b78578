//! Shared utilities and common types for the FitForge backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment detection, token signing)
//! - Error response structures returned at the API boundary

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, JwtConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
