//! Handler modules for the HTTP endpoints.

pub mod appointment;
pub mod http;
pub mod user;

pub use appointment::{create_appointment, get_appointments};
pub use http::{health_check, root, route_not_found};
pub use user::{create_user, delete_user, get_user, get_users};
