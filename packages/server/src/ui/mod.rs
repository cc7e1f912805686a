//! HTTP server implementation (axum).

mod error;
mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use error::{ApiError, ServerError};
pub use router::build_router;
pub use runner::run;
