//! Request-time errors for page and fragment handlers.
//!
//! Missing content maps to 404; everything else is a server fault, logged
//! and reported as 500 with the error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template engine error: {0}")]
    Template(#[from] tera::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Markdown frontmatter error for file: {0}")]
    Frontmatter(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Template(_) | Self::Io(_) | Self::Frontmatter(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
