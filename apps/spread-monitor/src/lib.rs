// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Spread Monitor - Credit Spread Position Reporter
//!
//! Tracks open credit-spread positions (bull put / bear call verticals),
//! marks them against current underlying prices, and produces a portfolio
//! report with per-position unrealized P&L and a risk status flag.
//!
//! P&L uses the piecewise-linear expiration payoff: a position is at max
//! profit beyond the short strike, at max loss beyond the long strike, and
//! linearly interpolated between the strikes. This is intentionally not a
//! pre-expiration options pricing model.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: `CreditSpreadPosition` and the payoff math
//! - **Application**: `PriceFeedPort` and the report builder/renderer
//! - **Infrastructure**: Finnhub quote adapter, JSON trade file store

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Position model and payoff math with no external dependencies.
pub mod domain;

/// Application layer - Report building and port definitions.
pub mod application;

/// Infrastructure layer - Adapters for quotes and the trade file.
pub mod infrastructure;

/// Environment-driven settings.
pub mod settings;

/// Console tracing setup.
pub mod telemetry;

// Domain re-exports
pub use domain::{CreditSpreadPosition, PnlSnapshot, PositionError, PositionRecord, SpreadKind};

// Application re-exports
pub use application::ports::{PriceFeedError, PriceFeedPort};
pub use application::report::{
    PortfolioReport, PortfolioTotals, PositionRow, PositionStatus, ReportConfig, build_report,
    render_table,
};

// Infrastructure re-exports
pub use infrastructure::persistence::{TradeFile, TradeStoreError};
pub use infrastructure::price_feed::{FinnhubPriceFeed, MockPriceFeed};
