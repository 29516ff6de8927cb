//! Favorites management
//!
//! In-memory management of favorite quotes, mirrored to the store.

use crate::data::store::FavoritesStore;
use crate::data::types::Quote;

/// Authoritative favorites state for the running process
///
/// Quotes are kept in insertion order and deduplicated by value equality
/// with a linear scan; a quote has no stable key field to hash on, and
/// favorites lists stay small.
///
/// Mutations update memory synchronously and queue an asynchronous write of
/// the full collection. The caller observes the new state immediately and
/// never waits on persistence.
pub struct FavoritesManager {
    store: FavoritesStore,
    quotes: Vec<Quote>,
    initialized: bool,
}

impl FavoritesManager {
    /// Create a manager with an empty collection
    ///
    /// Until [`initialize`](Self::initialize) runs, every quote reads as not
    /// favorited, even if the store holds it.
    pub fn new(store: FavoritesStore) -> Self {
        Self {
            store,
            quotes: Vec::new(),
            initialized: false,
        }
    }

    /// Load the persisted collection into memory
    ///
    /// Call once at startup, before any mutation. A repeat call is ignored:
    /// once loaded, the in-memory state is authoritative and is never
    /// clobbered by a re-read.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.quotes = self.store.load();
        self.initialized = true;
    }

    /// True iff an equal quote is in the collection
    ///
    /// Pure read, O(n) scan by value equality.
    pub fn is_favorited(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }

    /// Add the quote if absent, remove it if present
    ///
    /// Exactly one of add/remove happens per call. Removal drops every
    /// equal element (the no-duplicate invariant guarantees at most one).
    pub fn toggle(&mut self, quote: &Quote) {
        if self.is_favorited(quote) {
            self.quotes.retain(|q| q != quote);
        } else {
            self.quotes.push(quote.clone());
        }
        self.persist();
    }

    /// Remove any equal quote; the collection is unchanged if absent
    pub fn remove(&mut self, quote: &Quote) {
        self.quotes.retain(|q| q != quote);
        self.persist();
    }

    /// Read-only snapshot in insertion order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Iterate favorites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }

    /// Number of favorites
    pub fn count(&self) -> usize {
        self.quotes.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Block until every queued write has been attempted
    ///
    /// Production code never needs this; it exists so tests and shutdown
    /// paths can observe persistence deterministically.
    pub fn flush(&self) {
        self.store.flush();
    }

    fn persist(&self) {
        self.store.save(self.quotes.clone());
    }
}
