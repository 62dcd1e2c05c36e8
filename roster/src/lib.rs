//! A client for the random user API that keeps a list of generated users.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod render;
pub mod screen;
