//! UseCase: 予約作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateAppointment::execute() による予約作成と重複チェック
//!
//! ### どのような状況を想定しているか
//! - 正常系：重ならない予約の作成
//! - 異常系：既存の予約と重なる期間、過去の開始日時
//! - エッジケース：終了日時ちょうどに始まる予約（境界を含むので重複扱い）

use std::sync::Arc;

use agenda_shared::time::get_utc_now;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::{Appointment, AppointmentRepository, ConflictError, Timestamp};

use super::error::UseCaseError;

/// 予約作成の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppointmentInput {
    pub customer: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// 予約作成のユースケース
pub struct CreateAppointment {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn AppointmentRepository>,
    write_lock: Mutex<()>,
}

impl CreateAppointment {
    /// 新しい CreateAppointment を作成
    pub fn new(repository: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// 予約作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Appointment)` - 作成された予約
    /// * `Err(UseCaseError::Conflict)` - 既存の予約と期間が重なる（境界の一致を含む）
    /// * `Err(UseCaseError::Validation)` - 開始・終了日時が不正
    pub async fn execute(&self, input: CreateAppointmentInput) -> Result<Appointment, UseCaseError> {
        let _guard = self.write_lock.lock().await;

        let starts_at = Timestamp::new(input.starts_at);
        let ends_at = Timestamp::new(input.ends_at);

        // 1. 重複チェック
        if self
            .repository
            .find_overlapping(starts_at, ends_at)
            .await
            .is_some()
        {
            return Err(ConflictError::AppointmentOverlap.into());
        }

        // 2. ドメインモデルの生成（検証エラーはそのまま返す）
        let appointment = Appointment::new(
            input.customer,
            starts_at,
            ends_at,
            Timestamp::new(get_utc_now()),
        )?;

        self.repository.create(appointment.clone()).await?;
        tracing::info!(
            customer = appointment.customer(),
            starts_at = %appointment.starts_at(),
            ends_at = %appointment.ends_at(),
            "Appointment created"
        );

        Ok(appointment)
    }

    /// 全予約を登録順で返す
    pub async fn get_all(&self) -> Vec<Appointment> {
        self.repository.get_all().await
    }
}
