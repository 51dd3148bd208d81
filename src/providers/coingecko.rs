//! CoinGecko market data provider implementation

use crate::{
    constants::{
        COINGECKO_API_URL, COINGECKO_COINS_ENDPOINT, COINGECKO_MARKETS_ENDPOINT,
        REQUEST_TIMEOUT_SECS, USER_AGENT,
    },
    error::ProviderError,
    provider::MarketDataProvider,
    types::{MarketChart, MarketDetails, MarketItem, MarketQuery},
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// CoinGecko market data provider
///
/// This is the single place where network parameters (base address,
/// timeout) live and where transport failures are wrapped into the
/// provider error taxonomy.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Creates a new CoinGecko provider
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::Network)?;

        Ok(Self {
            client,
            base_url: COINGECKO_API_URL.to_string(),
        })
    }

    /// Builds the query pairs for a market listing request
    fn market_params(query: &MarketQuery) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", query.vs_currency.clone()),
            ("order", query.order.clone()),
            ("per_page", query.per_page.to_string()),
            ("page", query.page.to_string()),
            ("sparkline", query.sparkline.to_string()),
        ]
    }

    /// Issues a GET request, mapping transport failures to `Network`
    async fn get(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Response, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Fetching from CoinGecko");

        self.client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(ProviderError::Network)
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_markets(&self, query: &MarketQuery) -> Result<Vec<MarketItem>, ProviderError> {
        let params = Self::market_params(query);
        let response = self.get(COINGECKO_MARKETS_ENDPOINT, &params).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::upstream(status));
        }

        let items: Vec<MarketItem> = response.json().await.map_err(ProviderError::Network)?;
        tracing::debug!(count = items.len(), "Fetched market listing");
        Ok(items)
    }

    async fn fetch_details(&self, id: &str) -> Result<MarketDetails, ProviderError> {
        // Payload-size minimization: everything but the market data block
        // is switched off.
        let params = vec![
            ("localization", "false".to_string()),
            ("tickers", "false".to_string()),
            ("community_data", "false".to_string()),
            ("developer_data", "false".to_string()),
            ("sparkline", "false".to_string()),
        ];

        let path = format!("{}/{}", COINGECKO_COINS_ENDPOINT, id);
        let response = self.get(&path, &params).await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::not_found(id));
        }
        if !status.is_success() {
            return Err(ProviderError::upstream(status));
        }

        response.json().await.map_err(ProviderError::Network)
    }

    async fn fetch_chart(&self, id: &str, days: u32) -> Result<MarketChart, ProviderError> {
        let params = vec![
            ("vs_currency", "usd".to_string()),
            ("days", days.to_string()),
        ];

        let path = format!("{}/{}/market_chart", COINGECKO_COINS_ENDPOINT, id);
        let response = self.get(&path, &params).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::upstream(status));
        }

        let chart: MarketChart = response.json().await.map_err(ProviderError::Network)?;
        tracing::debug!(id = %id, points = chart.prices.len(), "Fetched price chart");
        Ok(chart)
    }

    fn provider_name(&self) -> &'static str {
        "coingecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_params_carry_defaults() {
        let params = CoinGeckoProvider::market_params(&MarketQuery::default());

        assert_eq!(
            params,
            vec![
                ("vs_currency", "usd".to_string()),
                ("order", "market_cap_desc".to_string()),
                ("per_page", "50".to_string()),
                ("page", "1".to_string()),
                ("sparkline", "false".to_string()),
            ]
        );
    }

    #[test]
    fn market_params_merge_caller_overrides_per_field() {
        let query = MarketQuery {
            page: 2,
            ..Default::default()
        };
        let params = CoinGeckoProvider::market_params(&query);

        assert!(params.contains(&("page", "2".to_string())));
        assert!(params.contains(&("vs_currency", "usd".to_string())));
        assert!(params.contains(&("order", "market_cap_desc".to_string())));
        assert!(params.contains(&("per_page", "50".to_string())));
        assert!(params.contains(&("sparkline", "false".to_string())));
    }
}
