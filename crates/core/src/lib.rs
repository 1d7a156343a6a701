//! Domain layer for the Creative Hub content backend.
//!
//! Pure logic only: the moderation status machine, per-kind content
//! schemas, caller capabilities, and the storage ports that the `db`
//! crate implements. No I/O happens here apart from calls through the
//! [`ports`] traits.

pub mod caller;
pub mod contact;
pub mod content;
pub mod error;
pub mod moderation;
pub mod ports;
pub mod roles;
pub mod service;
pub mod types;
pub mod validation;
