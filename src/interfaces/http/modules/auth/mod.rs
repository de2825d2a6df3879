//! Authentication module: signup and login issuing JWT pairs

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
