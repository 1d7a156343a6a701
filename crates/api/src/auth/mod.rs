//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation. Tokens are minted by the
//!   identity provider, never by this service.

pub mod jwt;
