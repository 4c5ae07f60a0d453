use anyhow::Context;

use svcmarket_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    svcmarket_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = svcmarket_api::app::build_app(&config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
