mod config;
mod content;
mod error;
mod quotes;
mod render;
mod routes;
mod selector;
mod state;
mod theme;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("quote catalog error: {0}")]
    Quotes(#[from] quotes::QuoteError),
    #[error("Template engine error: {0}")]
    Template(#[from] tera::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let result = run().await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "homepage failed");
    }
    result
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;

    let templates = render::Templates::load(&config.templates_dir)?;

    // Load the catalog and build the selector before any route exists.
    let selector = quotes::load_selector(&config.quotes_path).await?;
    tracing::info!(count = selector.len(), path = %config.quotes_path.display(), "quote catalog loaded");

    let port = config.port;
    let state = state::AppState::new(config, selector, templates);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "homepage listening");
    axum::serve(listener, app).await?;
    Ok(())
}
