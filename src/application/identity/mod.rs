//! Identity module
//!
//! Contains the `IdentityService` which orchestrates the account
//! use-cases: signup, login, token issuance, the cookie-session
//! lifecycle and profile updates.

pub mod service;

pub use service::{IdentityService, ProfileUpdate};
