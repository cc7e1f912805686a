//! Domain layer error definitions.
//!
//! The `Display` text of every variant is user-facing and returned verbatim in
//! HTTP error bodies.

use thiserror::Error;

/// Entity invariant violations raised at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty!")]
    NameEmpty,

    /// Fewer than [`MIN_NAME_LENGTH`](super::value_object::MIN_NAME_LENGTH) characters.
    #[error("Name must contain at least 3 characters")]
    NameTooShort,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email")]
    EmailInvalid,

    /// Appointment start is not strictly after the current instant.
    #[error("Start date cannot be before now")]
    StartsInPast,

    /// Appointment end is not strictly after its start.
    #[error("End date cannot be before start date")]
    EndsBeforeStart,
}

/// Operations rejected because of existing state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConflictError {
    /// An active user already owns the email
    #[error("There is already an user with this email")]
    EmailTaken,

    #[error("Appointment overlaps with another appointment")]
    AppointmentOverlap,

    #[error("User already deleted")]
    UserAlreadyDeleted,
}

/// Lookups by id that found nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    #[error("User not found")]
    User,
}

/// Errors returned by repository write operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),
}
