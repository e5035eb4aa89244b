use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, ServiceConfig};
use payroll_engine::error::EngineError;
use payroll_engine::store::InMemoryStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing file falls back to defaults; a broken one aborts startup
    let (config, loaded_path, missing_path) = match ConfigLoader::from_env() {
        Ok(loader) => {
            let path = loader.path().display().to_string();
            (loader.into_config(), Some(path), None)
        }
        Err(EngineError::ConfigNotFound { path }) => (ServiceConfig::default(), None, Some(path)),
        Err(err) => return Err(err.into()),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(path) = loaded_path {
        tracing::info!(path = %path, "Configuration loaded");
    }
    if let Some(path) = missing_path {
        tracing::warn!(path = %path, "Configuration file not found, using defaults");
    }

    let bind_address = config.server.bind_address();
    let state = AppState::new(InMemoryStore::new());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        address = %bind_address,
        "Payroll API listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
