//! Profile page: the logged-in user's own account

pub mod handlers;

pub use handlers::*;
