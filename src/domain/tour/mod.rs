pub mod model;
pub mod repository;

pub use model::{NewTour, Tour, TourFilter, TourPatch, TourSort};
pub use repository::TourRepository;
