use std::net::{IpAddr, SocketAddr};

use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CHANAKYA_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "CHANAKYA_PORT", default_value = "3720")]
    pub port: u16,

    /// Fill missing placeholders with this value instead of rejecting the request
    #[arg(long, env = "CHANAKYA_MISSING_DEFAULT")]
    pub missing_default: Option<String>,

    /// Number of most recent chat messages rendered into `history`
    #[arg(long, env = "CHANAKYA_HISTORY_LIMIT", default_value = "20")]
    pub history_limit: usize,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 3720,
            missing_default: None,
            history_limit: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        server: ServerConfig,
    }

    #[test]
    fn default_matches_cli_defaults() {
        let parsed = Cli::parse_from(["chanakya-server"]).server;
        let default = ServerConfig::default();
        assert_eq!(parsed.addr(), default.addr());
        assert_eq!(parsed.history_limit, default.history_limit);
        assert_eq!(parsed.missing_default, default.missing_default);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Cli::parse_from([
            "chanakya-server",
            "--bind",
            "127.0.0.1",
            "--port",
            "4000",
            "--missing-default",
            "unknown",
        ])
        .server;
        assert_eq!(parsed.addr().to_string(), "127.0.0.1:4000");
        assert_eq!(parsed.missing_default.as_deref(), Some("unknown"));
    }
}
