use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_dispatch::api::{run_server, AppState};
use fleet_dispatch::config::ServerConfig;
use fleet_dispatch::dispatch::Fleet;
use fleet_dispatch::shutdown::install_shutdown_handler;

#[derive(Parser, Debug)]
#[command(name = "fleet-dispatch")]
#[command(version)]
#[command(about = "Driver, truck and daily assignment management API")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', default_value = "8000")]
    port: u16,

    /// Allowed CORS origin (repeatable). Defaults to the local dev servers.
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let config = ServerConfig::new(SocketAddr::new(self.host, self.port));
        if self.cors_origins.is_empty() {
            return config;
        }
        config.with_cors_origins(self.cors_origins)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();
    tracing::info!(
        addr = %config.listen_addr,
        cors_origins = ?config.cors_origins,
        "Configuration loaded"
    );

    let shutdown = install_shutdown_handler()?;
    let state = AppState::new(Fleet::new());
    run_server(config, state, shutdown).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_config() {
        let config = Args::parse_from(["fleet-dispatch"]).into_config();
        let default = ServerConfig::default();
        assert_eq!(config.listen_addr, default.listen_addr);
        assert_eq!(config.cors_origins, default.cors_origins);
    }

    #[test]
    fn cors_origins_override_defaults() {
        let config = Args::parse_from([
            "fleet-dispatch",
            "--host",
            "127.0.0.1",
            "-p",
            "9001",
            "--cors-origin",
            "https://a.example",
            "--cors-origin",
            "https://b.example",
        ])
        .into_config();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9001");
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }
}
