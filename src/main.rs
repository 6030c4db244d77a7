#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rally=debug")))
        .init();

    let config = config::HostConfig::from_env()?;
    let addr = config.socket_addr();

    let app = routes::app(&config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, site_root = %config.site_root, "rally listening");
    axum::serve(listener, app).await?;
    Ok(())
}
