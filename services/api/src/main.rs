use api::config::ApiConfig;
use api::router::create_router;
use api::state::AppState;
use std::sync::Arc;
use store::DirectoryStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting marketplace directory API service");

    let config = ApiConfig::from_env();

    // The store handle is built once here and injected everywhere.
    let store = Arc::new(DirectoryStore::new());
    let state = AppState::new(store);

    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
