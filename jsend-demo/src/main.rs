//! JSend demo service - Main Entry Point

use anyhow::Result;
use jsend_demo::{create_app, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse_config();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,jsend=debug,jsend_axum=debug,jsend_demo=debug"));
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    info!("Starting JSend demo service");

    let jsend_config = match config.jsend_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load JSend configuration: {:#}", e);
            return Err(e);
        }
    };

    let app = create_app(AppState::new(jsend_config));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("JSend demo listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
