//! User endpoints.
//!
//! The use case returns deleted users as well; hiding them unless the client
//! asks with `includesDeleted=true` happens here.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::{
    domain::{NotFoundError, UserId},
    infrastructure::dto::http::{
        CreateUserRequestDto, MessageDto, UserCreatedDto, UserDetailDto, UserListDto,
        UserSummaryDto, UserVisibilityQuery,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{CreateUserInput, UseCaseError},
};

/// `POST /users`
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<UserCreatedDto>), ApiError> {
    let dto: CreateUserRequestDto = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Failed to parse user body: {}", e);
        ApiError::InvalidJson
    })?;

    let user = state
        .user_service
        .execute(CreateUserInput {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedDto {
            message: "User created".to_string(),
            user: UserSummaryDto {
                name: user.name().as_str().to_string(),
                email: user.email().as_str().to_string(),
            },
        }),
    ))
}

/// `GET /users`
pub async fn get_users(
    State(state): State<Arc<AppState>>,
    query: Result<Query<UserVisibilityQuery>, QueryRejection>,
) -> Result<Json<UserListDto>, ApiError> {
    let Query(query) = query?;

    let users: Vec<UserDetailDto> = state
        .user_service
        .get_all()
        .await
        .iter()
        .filter(|user| query.includes_deleted || !user.is_deleted())
        .map(UserDetailDto::from)
        .collect();

    if users.is_empty() {
        return Err(ApiError::NoUsersFound);
    }

    Ok(Json(UserListDto { users }))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<UserVisibilityQuery>, QueryRejection>,
) -> Result<Json<UserDetailDto>, ApiError> {
    let id = parse_user_id(&id)?;
    let Query(query) = query?;

    let user = state
        .user_service
        .find_by_id(id)
        .await
        .filter(|user| query.includes_deleted || !user.is_deleted())
        .ok_or(UseCaseError::NotFound(NotFoundError::User))?;

    Ok(Json(UserDetailDto::from(&user)))
}

/// `DELETE /users/{id}`
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    let id = parse_user_id(&id)?;

    state.user_service.delete(id).await?;

    Ok(Json(MessageDto {
        message: format!("User with id {id} deleted successfully"),
    }))
}

fn parse_user_id(raw: &str) -> Result<UserId, ApiError> {
    raw.parse::<u64>()
        .map(UserId::new)
        .map_err(|_| ApiError::InvalidUserId)
}
