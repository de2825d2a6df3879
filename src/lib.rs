//! # Tripnest
//!
//! Travel booking backend: hotels, flights and tours with reservations,
//! reviews and payments.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic services (identity, booking)
//! - **infrastructure**: External concerns (SeaORM database, credentials)
//! - **interfaces**: HTTP surfaces (REST API with Swagger, web page endpoints)
//! - **shared**: Cross-cutting types and shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export the router
pub use interfaces::http::create_router;
