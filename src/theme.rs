//! Light/dark theme preference.
//!
//! The user's choice lives in a single `theme` cookie holding `"light"` or
//! `"dark"`. With no stored choice the client's `prefers-color-scheme`
//! hint decides. Toggling always stores the new choice.
//!
//! TRADE-OFFS
//! ==========
//! Browsers only send `Sec-CH-Prefers-Color-Scheme` after the server has
//! advertised it via `Accept-CH`, so the very first request from a client
//! without a cookie resolves to light.

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Serialize;

/// Name of the stored preference (and of its cookie).
pub const THEME_COOKIE: &str = "theme";

/// Client hint carrying the system color scheme.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

const COOKIE_MAX_AGE_DAYS: i64 = 365;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("unknown theme: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button. Shows the theme a click switches to.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "ph-sun",
            Self::Light => "ph-moon",
        }
    }

    /// Build the cookie that stores this theme as the user's preference.
    #[must_use]
    pub fn to_cookie(self, secure: bool) -> Cookie<'static> {
        Cookie::build((THEME_COOKIE, self.as_str()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(secure)
            .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS))
            .build()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// Parse a stored preference, treating unrecognized values as absent.
#[must_use]
pub fn stored_preference(raw: Option<&str>) -> Option<Theme> {
    raw.and_then(|v| v.parse().ok())
}

/// Pick the effective theme: a valid stored preference wins, otherwise
/// fall back to the system preference.
#[must_use]
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    stored_preference(stored).unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Whether the request's client hint reports a dark system color scheme.
#[must_use]
pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
