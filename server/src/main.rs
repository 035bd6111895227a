mod config;
mod error;
mod routes;
mod services;
mod state;

use error::ServerError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "walltex server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        backend = %config.backend_url,
        textures = %config.texture_dir.display(),
        "page host configured"
    );

    let state = state::AppState::new(config)?;
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "walltex listening");
    axum::serve(listener, app).await?;
    Ok(())
}
