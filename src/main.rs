use std::env;
use std::error::Error;
use std::net::SocketAddr;

use clt_shift_engine::api::{AppState, create_router};
use clt_shift_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

const ADDR_VAR: &str = "CLT_SHIFT_ENGINE_ADDR";
const CONFIG_VAR: &str = "CLT_SHIFT_ENGINE_CONFIG";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CONFIG_DIR: &str = "./config/clt";

type BoxError = Box<dyn Error + Send + Sync>;

/// Installs the fmt subscriber, honouring `RUST_LOG` when set.
fn init_tracing(default_level: &str) -> Result<(), BoxError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing("info")?;

    let config_dir = env::var(CONFIG_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr: SocketAddr = env::var(ADDR_VAR)
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        jurisdiction = %config.jurisdiction().code,
        version = %config.jurisdiction().version,
        regimes = ?config.regime_codes(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "CLT shift engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
