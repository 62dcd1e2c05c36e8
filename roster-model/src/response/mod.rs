//! API response models.

pub mod user;
