//! Web auth pages: login, signup and logout over the session cookie

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
