pub mod model;
pub mod repository;

pub use model::{NewSession, Session};
pub use repository::SessionRepository;
