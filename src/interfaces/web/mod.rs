//! Session-cookie web surface
//!
//! JSON twins of the server-rendered pages: same paths, same
//! per-page context, session cookie instead of bearer tokens. One
//! directory per page group, mirroring the REST modules.

pub mod auth;
pub mod bookings;
pub mod common;
pub mod flights;
pub mod hotels;
pub mod profile;
pub mod tours;
