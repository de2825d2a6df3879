pub mod model;
pub mod repository;

pub use model::{NewPayment, Payment, PaymentMethod, PaymentPatch};
pub use repository::PaymentRepository;
