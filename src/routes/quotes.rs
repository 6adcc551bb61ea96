//! Random quote routes.
//!
//! Every request draws from the shared selector, so consecutive requests
//! walk a full cycle of the catalog before any quote comes back.

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Json};

use crate::error::AppError;
use crate::state::AppState;

const NO_STORE: [(header::HeaderName, &str); 1] = [(header::CACHE_CONTROL, "no-store")];

/// `GET /api/quote` — next quote as JSON.
pub async fn next_quote(State(state): State<AppState>) -> impl IntoResponse {
    (NO_STORE, Json(state.next_quote()))
}

/// `GET /api/quote/fragment` — next quote rendered for the widget.
pub async fn next_fragment(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let quote = state.next_quote();
    let html = state.templates.render_quote(&quote)?;
    Ok((NO_STORE, Html(html)))
}

#[cfg(test)]
#[path = "quotes_test.rs"]
mod tests;
