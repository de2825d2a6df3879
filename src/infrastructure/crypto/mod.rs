//! Authentication credential primitives
//!
//! JWT token pairs for the REST API, bcrypt password hashing, and
//! opaque session tokens for the web surface.

pub mod jwt;
pub mod password;
pub mod session_token;

pub use jwt::{create_token_pair, verify_access_token, JwtConfig, TokenClaims, TokenPair};
pub use password::{hash_password, verify_password};
pub use session_token::{generate_session_token, hash_session_token};
