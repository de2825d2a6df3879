//! HTTP REST API interfaces
//!
//! - `common`: Response envelope, pagination and validated extractors
//! - `middleware`: Authentication middleware (bearer JWT + session cookie)
//! - `modules`: One module per resource (dto + handlers)
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::create_router;
