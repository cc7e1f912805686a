//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod create_appointment;
pub mod error;
pub mod user_service;

pub use create_appointment::{CreateAppointment, CreateAppointmentInput};
pub use error::UseCaseError;
pub use user_service::{CreateUserInput, UserService};
