use ghdata::server::{config::Config, error::Error, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let ghtorrent = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    startup::serve(&config, AppState { ghtorrent }).await
}
