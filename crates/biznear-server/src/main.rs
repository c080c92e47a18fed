mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = biznear_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = match &config.catalog_path {
        Some(path) => biznear_catalog::load_catalog_file(path)?,
        None => biznear_catalog::Catalog::embedded(),
    };
    tracing::info!(
        towns = catalog.towns().len(),
        districts = catalog.districts().len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );

    let store = biznear_store::HttpBusinessStore::new(
        &config.store_base_url,
        config.store_api_key.clone(),
        config.store_timeout_secs,
    )?;
    let matrix = biznear_distance::DistanceClient::new(
        &config.distance_base_url,
        config.distance_api_key.clone(),
        config.distance_timeout_secs,
    )?;

    let app = build_app(AppState {
        catalog: Arc::new(catalog),
        store: Arc::new(store),
        matrix: Arc::new(matrix),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
