//! Types for the crypto market client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ORDER, DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_VS_CURRENCY};

/// One asset's market snapshot as returned by the markets listing.
///
/// Immutable once received; the store replaces the whole list on every
/// successful fetch, never merging field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    /// Stable asset identifier, used as the primary key
    pub id: String,

    /// Ticker symbol (e.g. "btc")
    pub symbol: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,

    /// Logo image URL
    pub image: String,

    /// Current price in the quote currency
    pub current_price: f64,

    /// 24h price change percentage; absent when the upstream has no data
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Image variants for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVariants {
    pub thumb: String,
    pub small: String,
    pub large: String,
}

/// A single USD quote; the upstream omits it for illiquid assets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsdQuote {
    #[serde(default)]
    pub usd: Option<f64>,
}

/// Market-data block of the details endpoint.
///
/// Every numeric field is independently optional - the upstream may omit
/// any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailMarketData {
    #[serde(default)]
    pub current_price: UsdQuote,

    #[serde(default)]
    pub high_24h: UsdQuote,

    #[serde(default)]
    pub low_24h: UsdQuote,

    #[serde(default)]
    pub market_cap: UsdQuote,

    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

/// Extended per-asset record from the details endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDetails {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: ImageVariants,
    pub market_data: DetailMarketData,
}

/// Price series for one asset over a requested day window.
///
/// Each point is a (millisecond timestamp, price) pair, chronologically
/// ascending as delivered by the upstream. Duplicates and gaps are passed
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    pub prices: Vec<(i64, f64)>,
}

/// Query parameters for the markets listing.
///
/// `Default` carries the standard parameters; callers override individual
/// fields with struct-update syntax:
///
/// ```
/// use crypto_market_client::MarketQuery;
///
/// let query = MarketQuery {
///     page: 2,
///     ..Default::default()
/// };
/// assert_eq!(query.per_page, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuery {
    /// Quote currency
    pub vs_currency: String,

    /// Sort order
    pub order: String,

    /// Page size
    pub per_page: u32,

    /// Page number (1-based)
    pub page: u32,

    /// Whether to include sparkline data
    pub sparkline: bool,
}

impl Default for MarketQuery {
    fn default() -> Self {
        Self {
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            order: DEFAULT_ORDER.to_string(),
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            sparkline: false,
        }
    }
}

/// The market data store's held state.
///
/// Invariant: at rest (no fetch in flight) `is_loading` and `error` are
/// never both set.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    /// Current market items, in the order the upstream returned them
    pub items: Vec<MarketItem>,

    /// True only while a fetch is in flight
    pub is_loading: bool,

    /// Generic user-facing descriptor of the last failed load, if any
    pub error: Option<String>,

    /// When the items were last successfully replaced
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// True iff the held item sequence is non-empty
    pub fn has_data(&self) -> bool {
        !self.items.is_empty()
    }
}
