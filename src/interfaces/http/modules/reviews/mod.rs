//! Review module: public reads, author-gated writes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
