//! Quote catalog: the items behind the random-quote widget.
//!
//! The catalog is a JSON array of `{text, source, speaker}` objects read
//! once at startup. Its order is the selector's source order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::selector::{Selector, SelectorError};

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("quote catalog is empty: {0}")]
    Selector(#[from] SelectorError),
}

/// One displayable quotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    /// Link to where the quote comes from.
    pub source: String,
    pub speaker: String,
}

impl Quote {
    /// The source URL when it is safe to use as a link target.
    ///
    /// Only absolute `http`/`https` URLs qualify; anything else (including
    /// `javascript:` URLs) renders as plain text.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        let source = self.source.trim();
        let (scheme, rest) = source.split_once("://")?;
        let allowed = scheme.eq_ignore_ascii_case("https") || scheme.eq_ignore_ascii_case("http");
        (allowed && !rest.is_empty()).then_some(source)
    }
}

/// Parse a quote catalog from its JSON text.
pub fn parse_quotes(raw: &str) -> Result<Vec<Quote>, QuoteError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse the quote catalog at `path`.
pub async fn load_quotes(path: impl AsRef<Path>) -> Result<Vec<Quote>, QuoteError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_quotes(&raw)
}

/// Load the catalog and build the selector that serves it.
///
/// Both phases complete before this returns, so a caller holding the
/// selector never observes a half-loaded catalog.
pub async fn load_selector(path: impl AsRef<Path>) -> Result<Selector<Quote>, QuoteError> {
    let quotes = load_quotes(path).await?;
    Ok(Selector::new(&quotes)?)
}

#[cfg(test)]
#[path = "quotes_test.rs"]
mod tests;
