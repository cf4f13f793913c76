mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;
    let upstream = upstream::HttpUpstream::new(config.upstream_url.clone(), config.timeouts)?;
    tracing::info!(upstream = upstream.url(), site_root = %config.site_root.display(), "prediction relay configured");

    let state = state::AppState::new(Arc::new(upstream));
    let app = routes::app(state, &config.site_root);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(port = config.port, "ecopack listening");
    axum::serve(listener, app).await?;
    Ok(())
}
