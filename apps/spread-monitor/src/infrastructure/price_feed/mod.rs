//! Price Feed Adapters
//!
//! Implementations of `PriceFeedPort` for market data providers.

pub mod finnhub;
pub mod mock;

pub use finnhub::FinnhubPriceFeed;
pub use mock::MockPriceFeed;
