//! Price Feed Port (Driven Port)
//!
//! Interface for fetching current underlying prices.

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Price feed error.
///
/// A quote the feed cannot supply is an error for the caller to handle;
/// it is never silently substituted with a zero price.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PriceFeedError {
    /// Connection or transport error.
    #[error("Price feed connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Symbol not known to the feed.
    #[error("Symbol not found: {symbol}")]
    SymbolNotFound {
        /// The unknown symbol.
        symbol: String,
    },

    /// Feed responded but the quote could not be used.
    #[error("Price data unavailable")]
    DataUnavailable,
}

/// Port for fetching market prices.
#[async_trait]
pub trait PriceFeedPort: Send + Sync {
    /// Get the last traded price for a symbol.
    async fn get_last_price(&self, symbol: &str) -> Result<Decimal, PriceFeedError>;
}
