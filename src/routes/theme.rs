//! Theme preference routes.
//!
//! The preference store is the `theme` cookie. Reads resolve it against the
//! client's color-scheme hint; writes always store an explicit choice.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Serialize;

use crate::state::AppState;
use crate::theme::{self, THEME_COOKIE, Theme};

const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");

/// Ask browsers for the color-scheme hint, and keep caches keyed on it.
const CLIENT_HINT_HEADERS: [(HeaderName, &str); 2] =
    [(ACCEPT_CH, "Sec-CH-Prefers-Color-Scheme"), (header::VARY, "Sec-CH-Prefers-Color-Scheme, Cookie")];

#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub theme: Theme,
    /// Icon class for the toggle button.
    pub icon: &'static str,
    /// Whether the theme came from a stored preference.
    pub stored: bool,
}

impl ThemeView {
    fn new(theme: Theme, stored: bool) -> Self {
        Self { theme, icon: theme.icon_class(), stored }
    }
}

fn current_theme(jar: &CookieJar, headers: &HeaderMap) -> (Theme, bool) {
    let stored = jar.get(THEME_COOKIE).map(Cookie::value);
    let resolved = theme::resolve(stored, theme::prefers_dark(headers));
    (resolved, theme::stored_preference(stored).is_some())
}

/// `GET /api/theme` — effective theme for this client.
pub async fn current(jar: CookieJar, headers: HeaderMap) -> impl IntoResponse {
    let (resolved, stored) = current_theme(&jar, &headers);
    (CLIENT_HINT_HEADERS, Json(ThemeView::new(resolved, stored)))
}

/// `POST /api/theme/toggle` — flip the effective theme and store it.
pub async fn toggle(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let (from, _) = current_theme(&jar, &headers);
    let to = from.toggled();
    tracing::debug!(%from, %to, "theme toggled");

    let jar = jar.add(to.to_cookie(state.config.cookie_secure));
    (jar, CLIENT_HINT_HEADERS, Json(ThemeView::new(to, true)))
}

/// `POST /api/theme/{theme}` — store an explicit theme.
pub async fn set(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(raw): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let chosen: Theme = raw
        .parse()
        .map_err(|e: theme::ThemeError| (StatusCode::BAD_REQUEST, e.to_string()))?;
    tracing::debug!(theme = %chosen, "theme set");

    let jar = jar.add(chosen.to_cookie(state.config.cookie_secure));
    Ok((jar, CLIENT_HINT_HEADERS, Json(ThemeView::new(chosen, true))))
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
