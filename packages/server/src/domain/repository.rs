//! Repository traits.
//!
//! The domain layer owns these abstractions; the infrastructure layer provides
//! the implementations (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Appointment, User},
    error::RepositoryError,
    value_object::{Timestamp, UserId},
};

/// Storage for users, in insertion order.
///
/// Lookups see soft-deleted users too. Filtering out deleted users is the
/// caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a user. Uniqueness is not enforced here.
    async fn create(&self, user: User) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: UserId) -> Option<User>;

    /// First user with this exact email, deleted or not.
    async fn find_by_email(&self, email: &str) -> Option<User>;

    async fn get_all(&self) -> Vec<User>;

    /// Soft-delete a user.
    ///
    /// # Errors
    ///
    /// * `RepositoryError::NotFound` - no user has this id
    /// * `RepositoryError::Conflict` - the user is already deleted
    async fn delete(&self, id: UserId, at: Timestamp) -> Result<(), RepositoryError>;
}

/// Storage for appointments, in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: Appointment) -> Result<(), RepositoryError>;

    /// First stored appointment sharing an instant with the closed interval
    /// `[starts_at, ends_at]`.
    async fn find_overlapping(
        &self,
        starts_at: Timestamp,
        ends_at: Timestamp,
    ) -> Option<Appointment>;

    async fn get_all(&self) -> Vec<Appointment>;
}
