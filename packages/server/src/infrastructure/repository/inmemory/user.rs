//! InMemory User Repository 実装
//!
//! ドメイン層が定義する UserRepository trait の具体的な実装。
//! 挿入順の `Vec` を線形探索します（インデックスなし）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{NotFoundError, RepositoryError, Timestamp, User, UserId, UserRepository};

/// インメモリ User Repository 実装
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    /// 登録済みユーザー（論理削除済みを含む、挿入順 = ID 順）
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// 新しい InMemoryUserRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        users.push(user);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Option<User> {
        let users = self.users.lock().await;
        users.iter().find(|user| user.id() == id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.lock().await;
        users
            .iter()
            .find(|user| user.email().as_str() == email)
            .cloned()
    }

    async fn get_all(&self) -> Vec<User> {
        let users = self.users.lock().await;
        users.clone()
    }

    async fn delete(&self, id: UserId, at: Timestamp) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id() == id)
            .ok_or(NotFoundError::User)?;
        user.mark_deleted(at)?;
        Ok(())
    }
}
