//! Server configuration (command line and environment).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Agenda HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "agenda-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "AGENDA_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on (0 picks a free port)
    #[arg(short, long, env = "AGENDA_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log level for this crate when RUST_LOG is not set
    #[arg(long, env = "AGENDA_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
