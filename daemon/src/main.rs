//! Tournify daemon — entry point for the match API and the stub provider.

mod config;

use clap::Parser;
use config::ServiceConfig;
use std::path::PathBuf;
use std::time::Duration;

use tournify_provider::{ProviderClient, ProviderConfig};
use tournify_resolution::MatchResolver;
use tournify_rpc::RpcServer;
use tournify_stub_provider::StubServer;

/// Default port for the stub provider (`stub` subcommand).
const DEFAULT_STUB_PORT: u16 = 8001;

#[derive(Parser)]
#[command(name = "tournify-daemon", about = "Tournify match API daemon")]
struct Cli {
    /// Port to listen on (API defaults to 8000, stub provider to 8001).
    #[arg(long, env = "TOURNIFY_PORT")]
    port: Option<u16>,

    /// Base URL of the upstream match-history provider.
    #[arg(long, env = "TOURNIFY_PROVIDER_URL")]
    provider_url: Option<String>,

    /// Provider API key, sent verbatim in the Authorization header.
    #[arg(long, env = "TOURNIFY_PROVIDER_KEY")]
    provider_api_key: Option<String>,

    /// Per-request provider timeout in seconds.
    #[arg(long, env = "TOURNIFY_PROVIDER_TIMEOUT_SECS")]
    provider_timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TOURNIFY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the match API server.
    Serve,
    /// Run the synthetic match-history provider.
    Stub,
}

/// Initialize the tracing subscriber. `RUST_LOG` wins when set; the
/// configured level is the fallback.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_file_config(path: &PathBuf) -> Option<ServiceConfig> {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<ServiceConfig>(&contents) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!(
                    "failed to parse config file {}: {e}, using CLI defaults",
                    path.display()
                );
                None
            }
        },
        Err(e) => {
            eprintln!(
                "failed to read config file {}: {e}, using CLI defaults",
                path.display()
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base = cli
        .config
        .as_ref()
        .and_then(load_file_config)
        .unwrap_or_default();

    let config = ServiceConfig {
        port: cli.port.unwrap_or(base.port),
        provider_url: cli.provider_url.unwrap_or(base.provider_url),
        provider_api_key: cli.provider_api_key.or(base.provider_api_key),
        provider_timeout_secs: cli
            .provider_timeout_secs
            .unwrap_or(base.provider_timeout_secs),
        log_level: cli.log_level.unwrap_or(base.log_level),
    };

    init_tracing(&config.log_level);

    match cli.command {
        Command::Serve => {
            tracing::info!(
                "starting match API on port {} (provider: {})",
                config.port,
                config.provider_url
            );

            let mut provider_config = ProviderConfig::new(config.provider_url)
                .with_request_timeout(Duration::from_secs(config.provider_timeout_secs));
            if let Some(key) = config.provider_api_key {
                provider_config = provider_config.with_api_key(key);
            }

            let resolver = MatchResolver::new(ProviderClient::new(provider_config));
            let server = RpcServer::new(config.port, resolver);
            server.start().await?;
        }
        Command::Stub => {
            let port = cli.port.unwrap_or(DEFAULT_STUB_PORT);
            tracing::info!("starting stub provider on port {}", port);
            let server = StubServer::new(port);
            server.start().await?;
        }
    }

    Ok(())
}
