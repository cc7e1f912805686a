//! InMemory Appointment Repository 実装

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Appointment, AppointmentRepository, RepositoryError, Timestamp};

/// インメモリ Appointment Repository 実装
#[derive(Clone, Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<Mutex<Vec<Appointment>>>,
}

impl InMemoryAppointmentRepository {
    /// 新しい InMemoryAppointmentRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<(), RepositoryError> {
        let mut appointments = self.appointments.lock().await;
        appointments.push(appointment);
        Ok(())
    }

    async fn find_overlapping(
        &self,
        starts_at: Timestamp,
        ends_at: Timestamp,
    ) -> Option<Appointment> {
        let appointments = self.appointments.lock().await;
        appointments
            .iter()
            .find(|appointment| appointment.overlaps(starts_at, ends_at))
            .cloned()
    }

    async fn get_all(&self) -> Vec<Appointment> {
        let appointments = self.appointments.lock().await;
        appointments.clone()
    }
}
