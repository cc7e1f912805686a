//! Domain layer for the agenda service.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Appointment, User};
pub use error::{ConflictError, NotFoundError, RepositoryError, ValidationError};
#[cfg(test)]
pub use repository::{MockAppointmentRepository, MockUserRepository};
pub use repository::{AppointmentRepository, UserRepository};
pub use value_object::{Email, Timestamp, UserId, UserName};
