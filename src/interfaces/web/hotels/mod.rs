//! Hotel pages: public listing plus the session-gated form flows

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
