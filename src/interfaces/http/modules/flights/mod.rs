//! Flight catalog module: searchable listings, admin-gated writes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
