//! Appointment endpoints.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::http::{
        AppointmentCreatedDto, AppointmentDto, AppointmentListDto, CreateAppointmentRequestDto,
    },
    ui::{error::ApiError, state::AppState},
    usecase::CreateAppointmentInput,
};

/// `POST /appointments`
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<AppointmentCreatedDto>), ApiError> {
    let dto: CreateAppointmentRequestDto = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Failed to parse appointment body: {}", e);
        ApiError::InvalidJson
    })?;

    let appointment = state
        .create_appointment
        .execute(CreateAppointmentInput {
            customer: dto.customer,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppointmentCreatedDto {
            message: "Appointment created".to_string(),
            appointment: AppointmentDto::from(&appointment),
        }),
    ))
}

/// `GET /appointments`
pub async fn get_appointments(State(state): State<Arc<AppState>>) -> Json<AppointmentListDto> {
    let appointments = state
        .create_appointment
        .get_all()
        .await
        .iter()
        .map(AppointmentDto::from)
        .collect();

    Json(AppointmentListDto { appointments })
}
