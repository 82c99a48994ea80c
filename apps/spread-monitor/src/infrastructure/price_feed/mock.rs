//! Mock price feed for testing and offline runs.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::ports::{PriceFeedError, PriceFeedPort};

/// Mock price feed backed by a preset price map.
#[derive(Debug, Default)]
pub struct MockPriceFeed {
    prices: RwLock<HashMap<String, Decimal>>,
}

impl MockPriceFeed {
    /// Create a new empty mock price feed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prices: RwLock::new(HashMap::new()),
        }
    }

    /// Set the price for a symbol.
    pub fn set_price(&self, symbol: &str, price: Decimal) {
        let mut prices = self.prices.write().unwrap();
        prices.insert(symbol.to_string(), price);
    }

    /// Remove the price for a symbol.
    pub fn clear_price(&self, symbol: &str) {
        let mut prices = self.prices.write().unwrap();
        prices.remove(symbol);
    }
}

#[async_trait]
impl PriceFeedPort for MockPriceFeed {
    async fn get_last_price(&self, symbol: &str) -> Result<Decimal, PriceFeedError> {
        let prices = self.prices.read().unwrap();
        prices
            .get(symbol)
            .copied()
            .ok_or_else(|| PriceFeedError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }
}
