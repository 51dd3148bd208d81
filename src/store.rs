//! Observable market data store
//!
//! Orchestrates provider calls into a consumable snapshot: the current item
//! list, a loading flag, and the last load error. State lives in a watch
//! channel, so every mutation doubles as the change notification to the
//! presentation layer.

use crate::{
    constants::LOAD_ERROR_MESSAGE,
    favorites::FavoritesStore,
    provider::MarketDataProvider,
    types::{MarketItem, MarketQuery, MarketSnapshot},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

/// Market data store
///
/// Holds the current market snapshot and composes with the favorites store
/// to answer membership queries. Consumers read synchronously via
/// [`snapshot`](Self::snapshot) or observe changes via
/// [`subscribe`](Self::subscribe).
pub struct MarketDataStore {
    provider: Arc<dyn MarketDataProvider>,
    favorites: Arc<FavoritesStore>,
    state: watch::Sender<MarketSnapshot>,
}

impl MarketDataStore {
    /// Creates a store with an empty snapshot
    pub fn new(provider: Arc<dyn MarketDataProvider>, favorites: Arc<FavoritesStore>) -> Self {
        let (state, _) = watch::channel(MarketSnapshot::default());
        Self {
            provider,
            favorites,
            state,
        }
    }

    /// Loads the market listing with default parameters
    ///
    /// On success the held items are replaced wholesale. On failure of any
    /// kind the previous items are left untouched (last-known-good data is
    /// preserved) and a single generic error descriptor is set; the cause
    /// goes to the diagnostic log only. The loading flag is cleared on
    /// every exit path.
    ///
    /// Overlapping invocations proceed concurrently with no coalescing;
    /// whichever response resolves last determines the final snapshot.
    pub async fn load_markets(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.is_loading = true;
            snapshot.error = None;
        });

        match self.provider.fetch_markets(&MarketQuery::default()).await {
            Ok(items) => {
                tracing::debug!(
                    count = items.len(),
                    provider = self.provider.provider_name(),
                    "Loaded market data"
                );
                self.state.send_modify(|snapshot| {
                    snapshot.items = items;
                    snapshot.error = None;
                    snapshot.refreshed_at = Some(Utc::now());
                    snapshot.is_loading = false;
                });
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.provider.provider_name(),
                    "Failed to load market data"
                );
                self.state.send_modify(|snapshot| {
                    snapshot.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    snapshot.is_loading = false;
                });
            }
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> MarketSnapshot {
        self.state.borrow().clone()
    }

    /// Subscribes to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<MarketSnapshot> {
        self.state.subscribe()
    }

    /// True iff the held item sequence is non-empty
    pub fn has_data(&self) -> bool {
        self.state.borrow().has_data()
    }

    /// The held items in upstream order
    pub fn items(&self) -> Vec<MarketItem> {
        self.state.borrow().items.clone()
    }

    /// Whether the given asset is favorited; never blocks
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Toggles the given asset's favorite membership
    pub async fn toggle_favorite(&self, id: &str) {
        self.favorites.toggle_favorite(id).await;
    }
}
