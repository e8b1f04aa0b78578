//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{Claims, DEFAULT_TOKEN_TTL_MINUTES};
pub use user::User;
