//! API request models.

pub mod user;
