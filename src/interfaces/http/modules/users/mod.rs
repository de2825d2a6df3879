//! User account module: admin listing plus owner-or-admin profile edits

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
