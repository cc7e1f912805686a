//! UseCase: ユーザー管理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UserService::execute() によるユーザー作成（メール重複チェック、ID 採番）
//! - 検索系メソッドが論理削除済みユーザーをそのまま返すこと
//! - UserService::delete() のエラー伝播
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ユーザーの作成、検索、削除
//! - 異常系：有効なユーザーとのメール重複、存在しない ID、二重削除
//! - エッジケース：削除済みユーザーのメールアドレス再利用、削除後の ID 採番

use std::sync::Arc;

use agenda_shared::time::get_utc_now;
use tokio::sync::Mutex;

use crate::domain::{ConflictError, Timestamp, User, UserId, UserRepository};

use super::error::UseCaseError;

/// ユーザー作成の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
}

/// ユーザー管理のユースケース
pub struct UserService {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn UserRepository>,
    /// 確認から書き込みまでを直列化するロック
    write_lock: Mutex<()>,
}

impl UserService {
    /// 新しい UserService を作成
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// ユーザー作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - 作成されたユーザー（ID は既存の最大 ID + 1）
    /// * `Err(UseCaseError::Conflict)` - 有効なユーザーが同じメールアドレスを使用中
    /// * `Err(UseCaseError::Validation)` - 名前・メールアドレスが不正
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, UseCaseError> {
        let _guard = self.write_lock.lock().await;

        let users = self.repository.get_all().await;

        // 1. 有効なユーザーとのメール重複チェック（削除済みユーザーのメールは再利用できる）
        //    同じメールアドレスの削除済みユーザーが先に並んでいることがあるので全件を見る
        if users
            .iter()
            .any(|user| !user.is_deleted() && user.email().as_str() == input.email)
        {
            return Err(ConflictError::EmailTaken.into());
        }

        // 2. ID 採番（削除済みを含めた最大 ID + 1）
        let id = next_id(&users);

        // 3. ドメインモデルの生成（検証エラーはそのまま返す）
        let user = User::new(
            id,
            input.name,
            input.email,
            Timestamp::new(get_utc_now()),
        )?;

        self.repository.create(user.clone()).await?;
        tracing::info!(user_id = %user.id(), "User created");

        Ok(user)
    }

    pub async fn find_by_id(&self, id: UserId) -> Option<User> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        self.repository.find_by_email(email).await
    }

    /// 全ユーザー（論理削除済みを含む）を挿入順で返す
    pub async fn get_all(&self) -> Vec<User> {
        self.repository.get_all().await
    }

    /// ユーザーを論理削除する
    ///
    /// Repository のエラー（NotFound / Conflict）をそのまま返す
    pub async fn delete(&self, id: UserId) -> Result<(), UseCaseError> {
        let _guard = self.write_lock.lock().await;

        self.repository
            .delete(id, Timestamp::new(get_utc_now()))
            .await?;
        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}

fn next_id(users: &[User]) -> UserId {
    users
        .iter()
        .map(User::id)
        .max()
        .map_or(UserId::FIRST, |max| max.next())
}
