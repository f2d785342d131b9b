
use anyhow::{Context, Result};
use dateval::{create_app, AppState};
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dateval::util::env::load_dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(format!("{}=debug,{}=debug,tower_http=debug", env!("CARGO_PKG_NAME"), env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer())
        .init();

    let app_state = AppState::new().await?;

    let config = &app_state.config;
    config.validate_config()?;
    debug!("Config:\n {:#?}", config);

    if config.db.auto_migrate {
        debug!("Migrating database...");
        app_state.db.migrate().await?;
    }

    let addr = config.http.addr();
    info!("{} {} starting", config.app_name, config.app_version);
    let app = create_app(app_state.clone());
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Provider stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
