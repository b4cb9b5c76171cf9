use sea_orm::ConnectionTrait;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, ghtorrent::GhTorrent, model::app::AppState, router};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the GHTorrent database
pub async fn connect_to_database(config: &Config) -> Result<GhTorrent, Error> {
    let ghtorrent = GhTorrent::connect(&config.database_url).await?;

    tracing::info!(
        "Connected to GHTorrent database ({:?})",
        ghtorrent.connection().get_database_backend()
    );

    Ok(ghtorrent)
}

/// Bind the configured address and serve the HTTP API until the process exits
pub async fn serve(config: &Config, state: AppState) -> Result<(), Error> {
    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::routes().with_state(state)).await?;

    Ok(())
}
