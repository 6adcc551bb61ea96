//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_QUOTES_PATH: &str = "static/quotes.json";
pub const DEFAULT_WEBSITE_DIR: &str = "static";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_CONTENT_DIR: &str = "content";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// JSON quote catalog loaded at startup.
    pub quotes_path: PathBuf,
    /// Static site served as the router fallback.
    pub website_dir: PathBuf,
    /// Tera templates, loaded once at startup.
    pub templates_dir: PathBuf,
    /// Markdown pages and `blog/` posts.
    pub content_dir: PathBuf,
    /// Mark preference cookies `Secure`.
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            quotes_path: PathBuf::from(DEFAULT_QUOTES_PATH),
            website_dir: PathBuf::from(DEFAULT_WEBSITE_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUOTES_PATH`: default `static/quotes.json`
    /// - `WEBSITE_DIR`: default `static`
    /// - `TEMPLATES_DIR`: default `templates`
    /// - `CONTENT_DIR`: default `content`
    /// - `COOKIE_SECURE`: `true` (any case) or `1` to mark cookies secure, default off
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            quotes_path: env_path("QUOTES_PATH", DEFAULT_QUOTES_PATH),
            website_dir: env_path("WEBSITE_DIR", DEFAULT_WEBSITE_DIR),
            templates_dir: env_path("TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR),
            content_dir: env_path("CONTENT_DIR", DEFAULT_CONTENT_DIR),
            cookie_secure: env_flag("COOKIE_SECURE"),
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
