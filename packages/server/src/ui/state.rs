//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{AppointmentRepository, UserRepository},
    infrastructure::repository::{InMemoryAppointmentRepository, InMemoryUserRepository},
    usecase::{CreateAppointment, UserService},
};

/// State shared by every handler.
///
/// The use cases are built once so that their write locks are shared across
/// requests.
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub create_appointment: Arc<CreateAppointment>,
}

impl AppState {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        appointment_repository: Arc<dyn AppointmentRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            create_appointment: Arc::new(CreateAppointment::new(appointment_repository)),
        }
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryAppointmentRepository::new()),
        )
    }
}
