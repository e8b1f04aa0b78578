//! Authentication service module
//!
//! This module provides the registration/login flow on top of the password
//! hasher and the token service:
//! - User registration with duplicate-email detection
//! - Login with uniform failure reporting
//! - Bearer-token authentication of subsequent requests

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
