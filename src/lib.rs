//! linkding-cli: command-line client for the linkding bookmark service.

pub mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod handlers;
pub mod payload;
pub mod print;
pub mod session;
pub mod telemetry;
