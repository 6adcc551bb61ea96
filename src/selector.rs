//! Non-repeating random selection.
//!
//! DESIGN
//! ======
//! A `Selector` owns a private copy of its source items and a working pool
//! for the current cycle. Each draw removes one uniformly chosen item from
//! the pool; an empty pool is refilled from the source before drawing. Every
//! source item is therefore returned exactly once per cycle, and no item
//! repeats until the cycle is exhausted.
//!
//! The selector is a plain single-threaded value. Callers that share it
//! across tasks wrap it in a lock (see `state::AppState`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("selector requires at least one item")]
    Empty,
}

// =============================================================================
// SELECTOR
// =============================================================================

/// Yields source items in random order without repeats inside a cycle.
#[derive(Debug, Clone)]
pub struct Selector<T, R = StdRng> {
    /// Captured copy of the source sequence. Never mutated.
    source: Vec<T>,
    /// Items not yet drawn in the current cycle.
    pool: Vec<T>,
    rng: R,
}

impl<T: Clone> Selector<T, StdRng> {
    /// Build a selector over `items`, seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Empty`] if `items` is empty.
    pub fn new(items: &[T]) -> Result<Self, SelectorError> {
        Self::with_rng(items, StdRng::from_os_rng())
    }
}

impl<T: Clone, R: Rng> Selector<T, R> {
    /// Build a selector over `items` drawing indices from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Empty`] if `items` is empty.
    pub fn with_rng(items: &[T], rng: R) -> Result<Self, SelectorError> {
        if items.is_empty() {
            return Err(SelectorError::Empty);
        }
        Ok(Self { source: items.to_vec(), pool: Vec::with_capacity(items.len()), rng })
    }

    /// Draw the next item, starting a new cycle when the current one is spent.
    pub fn draw(&mut self) -> T {
        if self.pool.is_empty() {
            self.pool.extend_from_slice(&self.source);
        }
        let idx = self.rng.random_range(0..self.pool.len());
        self.pool.remove(idx)
    }

    /// Number of items in the source sequence (the cycle length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Items left to draw before the next refill.
    ///
    /// Zero both before the first draw and right after a cycle completes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

/// Infinite: `next` always returns `Some`.
impl<T: Clone, R: Rng> Iterator for Selector<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
