//! User aggregate

pub mod model;
pub mod repository;

pub use model::{NewUser, User, UserPatch};
pub use repository::UserRepository;
