//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the one quote selector for the process and the loaded templates,
//! both built during startup before the router exists, so handlers never
//! see an unloaded catalog.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::Config;
use crate::quotes::Quote;
use crate::render::Templates;
use crate::selector::Selector;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the selector is behind `Arc<Mutex<_>>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub templates: Arc<Templates>,
    quotes: Arc<Mutex<Selector<Quote>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, quotes: Selector<Quote>, templates: Templates) -> Self {
        Self {
            config: Arc::new(config),
            templates: Arc::new(templates),
            quotes: Arc::new(Mutex::new(quotes)),
        }
    }

    /// Draw the next quote. The lock is held only for the draw itself.
    #[must_use]
    pub fn next_quote(&self) -> Quote {
        let mut quotes = self.quotes.lock().unwrap_or_else(PoisonError::into_inner);
        let quote = quotes.draw();
        tracing::debug!(remaining = quotes.remaining(), "quote drawn");
        quote
    }

    /// Quotes left before the current cycle restarts.
    #[cfg(test)]
    pub fn quotes_remaining(&self) -> usize {
        self.quotes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remaining()
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
