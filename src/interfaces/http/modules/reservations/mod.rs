//! Hotel reservation module: the booking flow of the REST surface

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
