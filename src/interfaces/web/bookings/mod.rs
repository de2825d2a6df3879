//! Bookings pages: everything a user has reserved, across all kinds

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
