//! Finnhub quote adapter.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::ports::{PriceFeedError, PriceFeedPort};

/// Finnhub price feed adapter.
///
/// Implements `PriceFeedPort` against Finnhub's `/quote` endpoint.
#[derive(Debug)]
pub struct FinnhubPriceFeed {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl FinnhubPriceFeed {
    /// Create a new Finnhub price feed.
    pub fn new(
        token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PriceFeedError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PriceFeedError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            token: token.into(),
            base_url: base_url.into(),
        })
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<FinnhubQuote, PriceFeedError> {
        let url = format!("{}/quote", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.to_uppercase().as_str())])
            .header("X-Finnhub-Token", &self.token)
            .send()
            .await
            .map_err(|e| PriceFeedError::Connection {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PriceFeedError::Connection {
                message: format!("HTTP {status}: {body}"),
            });
        }

        response
            .json()
            .await
            .map_err(|_| PriceFeedError::DataUnavailable)
    }
}

#[async_trait]
impl PriceFeedPort for FinnhubPriceFeed {
    async fn get_last_price(&self, symbol: &str) -> Result<Decimal, PriceFeedError> {
        let quote = self.fetch_quote(symbol).await?;

        // Finnhub reports c = 0 for unknown symbols instead of an error
        if quote.current == 0.0 {
            return Err(PriceFeedError::SymbolNotFound {
                symbol: symbol.to_string(),
            });
        }

        Decimal::try_from(quote.current).map_err(|_| PriceFeedError::DataUnavailable)
    }
}

/// Finnhub `/quote` response.
#[derive(Debug, serde::Deserialize)]
struct FinnhubQuote {
    /// Current price.
    #[serde(rename = "c")]
    current: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn feed_for(server: &MockServer) -> FinnhubPriceFeed {
        FinnhubPriceFeed::new("test-token", server.uri(), TIMEOUT).unwrap()
    }

    #[tokio::test]
    async fn get_last_price_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .and(query_param("symbol", "AAPL"))
            .and(header("X-Finnhub-Token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "c": 177.5,
                "h": 179.0,
                "l": 176.2,
                "o": 178.1,
                "pc": 176.9
            })))
            .mount(&server)
            .await;

        let feed = feed_for(&server);
        let price = feed.get_last_price("AAPL").await.unwrap();

        assert_eq!(price, dec!(177.5));
    }

    #[tokio::test]
    async fn symbol_upper_cased() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .and(query_param("symbol", "AAPL"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "c": 150.0 })),
            )
            .mount(&server)
            .await;

        let feed = feed_for(&server);
        let price = feed.get_last_price("aapl").await.unwrap();

        assert_eq!(price, dec!(150));
    }

    #[tokio::test]
    async fn zero_price_means_unknown_symbol() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "c": 0.0 })),
            )
            .mount(&server)
            .await;

        let feed = feed_for(&server);
        let result = feed.get_last_price("NOPE").await;

        assert!(matches!(
            result,
            Err(PriceFeedError::SymbolNotFound { symbol }) if symbol == "NOPE"
        ));
    }

    #[tokio::test]
    async fn http_error_surfaces_as_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let feed = feed_for(&server);
        let result = feed.get_last_price("AAPL").await;

        match result {
            Err(PriceFeedError::Connection { message }) => {
                assert!(message.contains("429"));
            }
            other => panic!("expected connection error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_data_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let feed = feed_for(&server);
        let result = feed.get_last_price("AAPL").await;

        assert!(matches!(result, Err(PriceFeedError::DataUnavailable)));
    }
}
