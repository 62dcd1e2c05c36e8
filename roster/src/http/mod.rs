//! Random user API client.

pub mod client;
pub mod request;

pub use client::{Client, Request, StatusError};
