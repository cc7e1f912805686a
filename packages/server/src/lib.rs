//! Agenda: users and appointments over HTTP.
//!
//! Layers, innermost first:
//!
//! - [`domain`]: entities, value objects, repository traits, errors
//! - [`usecase`]: user management and appointment booking
//! - [`infrastructure`]: in-memory repositories, wire DTOs
//! - [`ui`]: axum handlers, routing, server startup

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
