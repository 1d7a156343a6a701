//! Row structs decoded from the database.
//!
//! Rows are converted into core domain types at the repository boundary.

pub mod moderated;
pub mod user;
