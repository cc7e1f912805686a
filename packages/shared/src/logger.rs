//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the binary's own crate logs at
/// `default_level` and everything else at `info`.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let crate_name = bin_name.replace('-', "_");
    format!("{crate_name}={default_level},tower_http={default_level},info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_uses_crate_name() {
        // テスト項目: バイナリ名のハイフンがクレート名のアンダースコアに変換される
        // when (操作):
        let directives = default_directives("agenda-server", "debug");

        // then (期待する結果):
        assert_eq!(directives, "agenda_server=debug,tower_http=debug,info");
    }
}
