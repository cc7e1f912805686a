//! UseCase 層のエラー定義
//!
//! ドメインのエラーを種類ごとに包むだけで、メッセージは書き換えません。

use thiserror::Error;

use crate::domain::{ConflictError, NotFoundError, RepositoryError, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

impl From<RepositoryError> for UseCaseError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(e) => Self::NotFound(e),
            RepositoryError::Conflict(e) => Self::Conflict(e),
        }
    }
}
