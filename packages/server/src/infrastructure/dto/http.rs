//! HTTP API request and response DTOs.
//!
//! Field names are camelCase on the wire; timestamps are RFC 3339 strings.

use agenda_shared::time::to_rfc3339;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Appointment, User};

/// Body of `POST /users`
///
/// Missing and `null` fields both arrive as `None` and are validated as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequestDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /appointments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequestDto {
    pub customer: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// Query string of the user read endpoints
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVisibilityQuery {
    #[serde(default)]
    pub includes_deleted: bool,
}

/// Name and email echoed back after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummaryDto {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedDto {
    pub message: String,
    pub user: UserSummaryDto,
}

/// User detail; `deletedAt` only appears once the user is deleted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>, // ISO 8601
}

impl From<&User> for UserDetailDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            name: user.name().as_str().to_string(),
            email: user.email().as_str().to_string(),
            deleted_at: user.deleted_at().map(|at| to_rfc3339(at.value())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListDto {
    pub users: Vec<UserDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub customer: String,
    pub starts_at: String, // ISO 8601
    pub ends_at: String,   // ISO 8601
}

impl From<&Appointment> for AppointmentDto {
    fn from(appointment: &Appointment) -> Self {
        Self {
            customer: appointment.customer().to_string(),
            starts_at: to_rfc3339(appointment.starts_at().value()),
            ends_at: to_rfc3339(appointment.ends_at().value()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCreatedDto {
    pub message: String,
    pub appointment: AppointmentDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListDto {
    pub appointments: Vec<AppointmentDto>,
}

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
