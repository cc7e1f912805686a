//! Agenda HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agenda-server -- --port 3000
//! ```

use agenda_server::ServerConfig;
use agenda_shared::logger::setup_logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = agenda_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
