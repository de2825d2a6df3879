//! Health probe

pub mod handlers;

pub use handlers::*;
