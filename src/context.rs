//! Application context: the composition root
//!
//! One context is constructed at process start and passed by reference to
//! whichever layer needs it. There is no global singleton and no ambient
//! lookup.

use crate::{
    connectivity::{ConnectivityMonitor, ConnectivitySignal},
    error::ProviderError,
    favorites::{FavoritesBackend, FavoritesStore},
    provider::MarketDataProvider,
    providers::CoinGeckoProvider,
    store::MarketDataStore,
};
use std::sync::Arc;

/// Wires the provider, stores, and connectivity monitor together
pub struct AppContext {
    markets: MarketDataStore,
    favorites: Arc<FavoritesStore>,
    connectivity: ConnectivityMonitor,
    provider: Arc<dyn MarketDataProvider>,
}

impl AppContext {
    /// Builds a context over the CoinGecko provider
    ///
    /// # Arguments
    /// * `backend` - Durable storage for favorites
    /// * `signal` - Platform connectivity source; `None` in headless
    ///   contexts, in which case the monitor stays online
    pub async fn initialize(
        backend: Box<dyn FavoritesBackend>,
        signal: Option<Arc<dyn ConnectivitySignal>>,
    ) -> Result<Self, ProviderError> {
        let provider: Arc<dyn MarketDataProvider> = Arc::new(CoinGeckoProvider::new()?);
        Ok(Self::with_provider(provider, backend, signal).await)
    }

    /// Builds a context over a caller-supplied provider
    ///
    /// This is primarily for testing with mock providers.
    pub async fn with_provider(
        provider: Arc<dyn MarketDataProvider>,
        backend: Box<dyn FavoritesBackend>,
        signal: Option<Arc<dyn ConnectivitySignal>>,
    ) -> Self {
        let favorites = Arc::new(FavoritesStore::new(backend));
        favorites.initialize().await;

        let connectivity = ConnectivityMonitor::new();
        connectivity.initialize(signal);

        let markets = MarketDataStore::new(provider.clone(), favorites.clone());

        Self {
            markets,
            favorites,
            connectivity,
            provider,
        }
    }

    /// The market data store
    pub fn markets(&self) -> &MarketDataStore {
        &self.markets
    }

    /// The favorites store
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The connectivity monitor
    pub fn connectivity(&self) -> &ConnectivityMonitor {
        &self.connectivity
    }

    /// Direct provider access, for detail and chart pages
    pub fn provider(&self) -> &dyn MarketDataProvider {
        self.provider.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MemoryBackend;
    use crate::provider::mock::MockProvider;

    #[tokio::test]
    async fn context_loads_persisted_favorites_at_startup() {
        let backend = Box::new(MemoryBackend::seeded(r#"["bitcoin"]"#));
        let ctx =
            AppContext::with_provider(Arc::new(MockProvider::new()), backend, None).await;

        assert!(ctx.favorites().is_favorite("bitcoin"));
        assert!(ctx.connectivity().is_online());
        assert!(!ctx.markets().has_data());
    }

    #[tokio::test]
    async fn provider_is_reachable_for_detail_pages() {
        let ctx = AppContext::with_provider(
            Arc::new(MockProvider::new()),
            Box::new(MemoryBackend::new()),
            None,
        )
        .await;

        assert_eq!(ctx.provider().provider_name(), "mock");
    }
}
