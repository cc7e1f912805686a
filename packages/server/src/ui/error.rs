//! UI layer error definitions and their HTTP mapping.

use std::{io, net::SocketAddr};

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{infrastructure::dto::http::ErrorDto, usecase::UseCaseError};

/// Errors returned by HTTP handlers.
///
/// Rendered as `{"error": <Display text>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    /// Request body is not valid JSON for the endpoint
    #[error("Invalid JSON")]
    InvalidJson,

    /// Path segment is not a non-negative integer
    #[error("Invalid user id")]
    InvalidUserId,

    /// No user is visible to a list request
    #[error("No users found")]
    NoUsersFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("Unknown error")]
    Unknown,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UseCase(UseCaseError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::UseCase(UseCaseError::Validation(_) | UseCaseError::Conflict(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NoUsersFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidJson | ApiError::InvalidUserId | ApiError::Unknown => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection);
        ApiError::Unknown
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), "Request failed: {}", self);

        let body = ErrorDto {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("could not bind server to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("could not serve HTTP requests")]
    Serve(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConflictError, NotFoundError, ValidationError};

    #[test]
    fn test_status_codes() {
        // テスト項目: エラーの種類ごとに HTTP ステータスが決まる
        let cases = [
            (
                ApiError::from(UseCaseError::NotFound(NotFoundError::User)),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(UseCaseError::Validation(ValidationError::EmailInvalid)),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(UseCaseError::Conflict(ConflictError::UserAlreadyDeleted)),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::NoUsersFound, StatusCode::NOT_FOUND),
            (ApiError::RouteNotFound, StatusCode::NOT_FOUND),
            (ApiError::InvalidJson, StatusCode::BAD_REQUEST),
            (ApiError::InvalidUserId, StatusCode::BAD_REQUEST),
            (ApiError::Unknown, StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "error: {error:?}");
        }
    }

    #[test]
    fn test_messages_pass_through() {
        // テスト項目: ドメインのエラーメッセージがそのまま使われる
        let error = ApiError::from(UseCaseError::Conflict(ConflictError::EmailTaken));

        assert_eq!(error.to_string(), "There is already an user with this email");
        assert_eq!(ApiError::Unknown.to_string(), "Unknown error");
    }

    #[test]
    fn test_into_response_status() {
        // テスト項目: IntoResponse で status_code() のステータスが設定される
        let response = ApiError::NoUsersFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
