use anyhow::Context;

use blogsvc_api::{app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    blogsvc_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    // Bootstrap the store once, before accepting requests.
    let store = app::services::build_store(&config.store)
        .await
        .context("failed to bootstrap blog store")?;

    let app = app::build_app(store);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::warn!("failed to listen for ctrl-c: {e}; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
