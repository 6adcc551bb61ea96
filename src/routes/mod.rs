//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page and client scripts are static files served from
//! `WEBSITE_DIR` as the router fallback. Markdown pages and the blog are
//! rendered through Tera. The API routes back the two interactive widgets:
//! the random quote and the light/dark theme toggle.

pub mod pages;
pub mod quotes;
pub mod theme;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router: API routes plus the static site fallback.
pub fn app(state: AppState) -> Router {
    let website = ServeDir::new(&state.config.website_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/about", get(pages::about))
        .route("/changelog", get(pages::changelog))
        .route("/blog", get(pages::blog))
        .route("/blog/{slug}", get(pages::blog_post))
        .route("/api/quote", get(quotes::next_quote))
        .route("/api/quote/fragment", get(quotes::next_fragment))
        .route("/api/theme", get(theme::current))
        .route("/api/theme/toggle", post(theme::toggle))
        .route("/api/theme/{theme}", post(theme::set))
        .route("/healthz", get(healthz))
        .fallback_service(website)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
