pub mod model;
pub mod repository;

pub use model::{NewReview, Review, ReviewPatch, ReviewTarget};
pub use repository::ReviewRepository;
