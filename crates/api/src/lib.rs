//! HTTP API for the Creative Hub content backend.
//!
//! Exposes the moderated collections (projects, team members, testimonials),
//! role lookup and the contact form over axum. The binary in `main.rs` wires
//! configuration and storage; integration tests build the same router on
//! in-memory storage.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
