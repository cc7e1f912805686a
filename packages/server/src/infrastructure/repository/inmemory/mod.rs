//! InMemory Repository 実装
//!
//! `Vec` をインメモリ DB として使用します。プロセス終了とともにデータは失われます。

mod appointment;
mod user;

pub use appointment::InMemoryAppointmentRepository;
pub use user::InMemoryUserRepository;
