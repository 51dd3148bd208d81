//! Constants for the crypto market client
//!
//! All configuration for the client is centralized here. No runtime
//! configuration is used - the system operates with these compile-time
//! constants.

/// CoinGecko API base URL
pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko endpoint for paginated market listings
pub const COINGECKO_MARKETS_ENDPOINT: &str = "/coins/markets";

/// CoinGecko endpoint prefix for per-asset details and charts
pub const COINGECKO_COINS_ENDPOINT: &str = "/coins";

/// HTTP request timeout for all upstream calls (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "crypto-market-client/0.1.0";

/// Default quote currency for market queries
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Default sort order for market listings
pub const DEFAULT_ORDER: &str = "market_cap_desc";

/// Default page size for market listings
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Default page number for market listings
pub const DEFAULT_PAGE: u32 = 1;

/// Default day window for price charts
pub const DEFAULT_CHART_DAYS: u32 = 7;

/// Durable-storage key for the persisted favorites list
pub const FAVORITES_STORAGE_KEY: &str = "crypto_favorites_v1";

/// The single user-facing message for a failed market-data load.
/// The store does not expose the failure cause to its consumers.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load cryptocurrency market data";
