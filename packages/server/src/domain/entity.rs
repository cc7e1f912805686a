//! Core domain models: users and appointments.

use serde::Serialize;

use super::{
    error::{ConflictError, ValidationError},
    value_object::{Email, Timestamp, UserId, UserName},
};

/// A registered user.
///
/// Everything except the soft-delete marker is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    created_at: Timestamp,
    deleted_at: Option<Timestamp>,
}

impl User {
    /// Create a new active user.
    ///
    /// Name rules are checked before email rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] raised by [`UserName::new`] or [`Email::new`].
    pub fn new(
        id: UserId,
        name: String,
        email: String,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = UserName::new(name)?;
        let email = Email::new(email)?;

        Ok(Self {
            id,
            name,
            email,
            created_at,
            deleted_at: None,
        })
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Soft-delete the user.
    ///
    /// # Errors
    ///
    /// Returns `ConflictError::UserAlreadyDeleted` if the user was deleted before.
    /// The original deletion time is kept in that case.
    pub fn mark_deleted(&mut self, at: Timestamp) -> Result<(), ConflictError> {
        if self.is_deleted() {
            return Err(ConflictError::UserAlreadyDeleted);
        }
        self.deleted_at = Some(at);
        Ok(())
    }
}

/// A booked time slot for a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    customer: String,
    starts_at: Timestamp,
    ends_at: Timestamp,
}

impl Appointment {
    /// Create a new appointment.
    ///
    /// `now` is the instant the request is handled at.
    ///
    /// # Errors
    ///
    /// * `ValidationError::StartsInPast` - `starts_at <= now`
    /// * `ValidationError::EndsBeforeStart` - `ends_at <= starts_at`
    pub fn new(
        customer: String,
        starts_at: Timestamp,
        ends_at: Timestamp,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        if starts_at <= now {
            return Err(ValidationError::StartsInPast);
        }
        if ends_at <= starts_at {
            return Err(ValidationError::EndsBeforeStart);
        }

        Ok(Self {
            customer,
            starts_at,
            ends_at,
        })
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn starts_at(&self) -> Timestamp {
        self.starts_at
    }

    pub fn ends_at(&self) -> Timestamp {
        self.ends_at
    }

    /// Whether this appointment shares at least one instant with `[starts_at, ends_at]`.
    ///
    /// Both intervals are closed, so appointments touching at a boundary overlap.
    pub fn overlaps(&self, starts_at: Timestamp, ends_at: Timestamp) -> bool {
        self.starts_at <= ends_at && starts_at <= self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
    }

    fn past_now() -> Timestamp {
        ts(2022, 1, 1)
    }

    #[test]
    fn test_user_new_success() {
        // テスト項目: 有効な名前とメールアドレスでユーザーを作成できる
        // given (前提条件):
        let created_at = ts(2030, 1, 1);

        // when (操作):
        let user = User::new(
            UserId::FIRST,
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
            created_at,
        )
        .unwrap();

        // then (期待する結果):
        assert_eq!(user.id(), UserId::FIRST);
        assert_eq!(user.name().as_str(), "John Doe");
        assert_eq!(user.email().as_str(), "johndoe@example.com");
        assert_eq!(user.created_at(), created_at);
        assert_eq!(user.deleted_at(), None);
        assert!(!user.is_deleted());
    }

    #[test]
    fn test_user_new_checks_name_before_email() {
        // テスト項目: 名前とメールアドレスが両方不正な場合、名前のエラーが優先される
        let blank = User::new(UserId::FIRST, " ".to_string(), String::new(), ts(2030, 1, 1));
        let short = User::new(
            UserId::FIRST,
            "Jo".to_string(),
            "not-an-email".to_string(),
            ts(2030, 1, 1),
        );

        assert_eq!(blank, Err(ValidationError::NameEmpty));
        assert_eq!(short, Err(ValidationError::NameTooShort));
    }

    #[test]
    fn test_user_new_email_errors() {
        // テスト項目: 名前が有効な場合はメールアドレスのエラーが返される
        let missing = User::new(UserId::FIRST, "John".to_string(), String::new(), ts(2030, 1, 1));
        let invalid = User::new(
            UserId::FIRST,
            "John".to_string(),
            "john.example.com".to_string(),
            ts(2030, 1, 1),
        );

        assert_eq!(missing, Err(ValidationError::EmailRequired));
        assert_eq!(invalid, Err(ValidationError::EmailInvalid));
    }

    #[test]
    fn test_user_mark_deleted_twice_conflicts() {
        // テスト項目: 削除済みユーザーを再度削除するとエラーになり、最初の削除時刻は保持される
        // given (前提条件):
        let mut user = User::new(
            UserId::FIRST,
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
            ts(2030, 1, 1),
        )
        .unwrap();
        let first = ts(2030, 1, 2);

        // when (操作):
        user.mark_deleted(first).unwrap();
        let second = user.mark_deleted(ts(2030, 1, 3));

        // then (期待する結果):
        assert_eq!(second, Err(ConflictError::UserAlreadyDeleted));
        assert_eq!(user.deleted_at(), Some(first));
    }

    #[test]
    fn test_appointment_new_success() {
        // テスト項目: 未来の期間で予約を作成できる
        let appointment = Appointment::new(
            "John Doe".to_string(),
            ts(2030, 2, 28),
            ts(2030, 3, 1),
            past_now(),
        )
        .unwrap();

        assert_eq!(appointment.customer(), "John Doe");
        assert_eq!(appointment.starts_at(), ts(2030, 2, 28));
        assert_eq!(appointment.ends_at(), ts(2030, 3, 1));
    }

    #[test]
    fn test_appointment_starts_in_past_fails() {
        // テスト項目: 開始日時が現在以前の予約は作成できない (開始 == 現在も不可)
        let now = ts(2030, 1, 1);

        let before = Appointment::new("John".to_string(), ts(2029, 12, 31), ts(2030, 1, 2), now);
        let equal = Appointment::new("John".to_string(), now, ts(2030, 1, 2), now);

        assert_eq!(before, Err(ValidationError::StartsInPast));
        assert_eq!(equal, Err(ValidationError::StartsInPast));
    }

    #[test]
    fn test_appointment_ends_before_start_fails() {
        // テスト項目: 終了日時が開始日時以前の予約は作成できない
        let before = Appointment::new(
            "John".to_string(),
            ts(2030, 2, 28),
            ts(2030, 2, 27),
            past_now(),
        );
        let equal = Appointment::new(
            "John".to_string(),
            ts(2030, 2, 28),
            ts(2030, 2, 28),
            past_now(),
        );

        assert_eq!(before, Err(ValidationError::EndsBeforeStart));
        assert_eq!(equal, Err(ValidationError::EndsBeforeStart));
    }

    #[test]
    fn test_appointment_start_checked_before_end() {
        // テスト項目: 開始日時と終了日時が両方不正な場合、開始日時のエラーが優先される
        let result = Appointment::new(
            "John".to_string(),
            ts(2021, 1, 2),
            ts(2021, 1, 1),
            past_now(),
        );

        assert_eq!(result, Err(ValidationError::StartsInPast));
    }

    #[test]
    fn test_appointment_overlaps_is_inclusive() {
        // テスト項目: 区間の重なり判定は両端を含む
        // given (前提条件):
        let a = Appointment::new(
            "John".to_string(),
            ts(2030, 2, 28),
            ts(2030, 3, 1),
            past_now(),
        )
        .unwrap();
        let one_second = Duration::seconds(1);

        // then (期待する結果):
        // identical
        assert!(a.overlaps(ts(2030, 2, 28), ts(2030, 3, 1)));
        // touching at either end
        assert!(a.overlaps(ts(2030, 3, 1), ts(2030, 3, 2)));
        assert!(a.overlaps(ts(2030, 2, 27), ts(2030, 2, 28)));
        // contained and containing
        assert!(a.overlaps(
            Timestamp::new(ts(2030, 2, 28).value() + one_second),
            Timestamp::new(ts(2030, 3, 1).value() - one_second),
        ));
        assert!(a.overlaps(ts(2030, 2, 1), ts(2030, 4, 1)));
        // disjoint
        assert!(!a.overlaps(
            Timestamp::new(ts(2030, 3, 1).value() + one_second),
            ts(2030, 3, 2),
        ));
        assert!(!a.overlaps(
            ts(2030, 2, 26),
            Timestamp::new(ts(2030, 2, 28).value() - one_second),
        ));
    }
}
