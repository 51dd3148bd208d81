//! # Crypto Market Client
//!
//! Data-synchronization and local-state layer for a cryptocurrency market
//! dashboard. Fetches market data from the CoinGecko API, tracks
//! loading/error state, persists user favorites across sessions, and
//! mirrors platform connectivity changes.
//!
//! Presentation layers (lists, charts, routing) are consumers only: they
//! read the observable snapshot this crate maintains and call its
//! operations, but hold no state of their own.
//!
//! ## Usage
//!
//! Construct one [`AppContext`] at process start and pass it by reference
//! to whichever layer needs it:
//!
//! ```no_run
//! use crypto_market_client::{AppContext, FileBackend};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = AppContext::initialize(
//!     Box::new(FileBackend::new("./data")),
//!     None, // headless: connectivity stays online
//! )
//! .await?;
//!
//! ctx.markets().load_markets().await;
//!
//! let snapshot = ctx.markets().snapshot();
//! for item in &snapshot.items {
//!     let marker = if ctx.favorites().is_favorite(&item.id) { "*" } else { " " };
//!     println!("{} {}: ${:.2}", marker, item.name, item.current_price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure behavior
//!
//! A failed load keeps the last successfully loaded list and sets a single
//! generic error descriptor; the cause is logged, not surfaced. A failed
//! favorites write is invisible to the caller - the in-memory set stays
//! authoritative for the session.

pub mod connectivity;
pub mod constants;
pub mod context;
pub mod error;
pub mod favorites;
pub mod provider;
pub mod providers;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use connectivity::{ConnectivityMonitor, ConnectivitySignal};
pub use context::AppContext;
pub use error::{PersistenceError, ProviderError};
pub use favorites::{FavoritesBackend, FavoritesStore, FileBackend, MemoryBackend};
pub use provider::MarketDataProvider;
pub use providers::CoinGeckoProvider;
pub use store::MarketDataStore;
pub use types::{
    MarketChart, MarketDetails, MarketItem, MarketQuery, MarketSnapshot,
};
