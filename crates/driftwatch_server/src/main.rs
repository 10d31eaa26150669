use anyhow::Context;
use driftwatch_server::api::router::create_router;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn start_server() -> Result<(), anyhow::Error> {
    let port =
        std::env::var("DRIFTWATCH_SERVER_PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    info!("Driftwatch server listening on {addr}");

    axum::serve(listener, create_router())
        .await
        .with_context(|| "Server error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    setup_logging();
    start_server().await
}
