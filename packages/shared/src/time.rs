//! Time helpers.
//!
//! All instants are UTC. The wire format is RFC 3339.

use chrono::{DateTime, SecondsFormat, Utc};

/// Current instant in UTC.
pub fn get_utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Format an instant as RFC 3339 with millisecond precision (e.g. `2030-02-28T10:00:00.000Z`).
pub fn to_rfc3339(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_to_rfc3339_millis_and_zulu() {
        // テスト項目: RFC 3339 (ミリ秒, Z 表記) で整形される
        // given (前提条件):
        let value = Utc.with_ymd_and_hms(2030, 2, 28, 10, 0, 0).unwrap();

        // when (操作):
        let formatted = to_rfc3339(value);

        // then (期待する結果):
        assert_eq!(formatted, "2030-02-28T10:00:00.000Z");
    }

    #[test]
    fn test_get_utc_now_is_monotonic_enough() {
        // テスト項目: 連続して取得した現在時刻は後退しない
        let first = get_utc_now();
        let second = get_utc_now();

        assert!(second >= first);
    }
}
