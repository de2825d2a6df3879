//! Interface layer
//!
//! Two HTTP surfaces over the same application services: the `/api`
//! REST resources (bearer tokens) and the `web` page endpoints the
//! frontend consumes (session cookie).

pub mod http;
pub mod web;
