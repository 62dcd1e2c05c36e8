//! Typed requests against the API.

pub mod user;
