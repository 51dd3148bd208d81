//! Provider abstraction for fetching market data from the upstream API

use crate::{
    error::ProviderError,
    types::{MarketChart, MarketDetails, MarketItem, MarketQuery},
};
use async_trait::async_trait;

/// Trait for market data providers
///
/// Implementations translate typed requests into calls against an external
/// market-data API. Providers perform no retries; retry policy, if any,
/// belongs to the caller.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the paginated market listing
    ///
    /// # Arguments
    /// * `query` - Listing parameters; `MarketQuery::default()` for the
    ///   standard page
    ///
    /// # Returns
    /// Market items in the order the upstream returned them
    async fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<MarketItem>, ProviderError>;

    /// Fetches the extended record for a single asset
    ///
    /// # Arguments
    /// * `id` - Non-empty asset identifier
    async fn fetch_details(&self, id: &str) -> Result<MarketDetails, ProviderError>;

    /// Fetches the price series for a single asset
    ///
    /// # Arguments
    /// * `id` - Non-empty asset identifier
    /// * `days` - Positive day window; `DEFAULT_CHART_DAYS` is the usual value
    async fn fetch_chart(&self, id: &str, days: u32) -> Result<MarketChart, ProviderError>;

    /// Returns the name of this provider
    fn provider_name(&self) -> &'static str;
}
