//! Report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::SpreadKind;

/// Risk status of a position relative to its short strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionStatus {
    /// Underlying is more than the safe buffer beyond the short strike in
    /// the profitable direction.
    Safe,
    /// Underlying is within the buffer of the short strike, still on the
    /// profitable side.
    Watch,
    /// Underlying has crossed the short strike; the position is losing.
    Itm,
    /// No quote was available; the position could not be valued.
    NoQuote,
}

impl PositionStatus {
    /// Classify a position from the current price and its short strike.
    ///
    /// `safe_buffer` is a fraction of the short strike (0.05 = 5%).
    #[must_use]
    pub fn classify(
        kind: SpreadKind,
        price: Decimal,
        short_strike: Decimal,
        safe_buffer: Decimal,
    ) -> Self {
        // Signed cushion between price and short strike, positive in the
        // profitable direction. Strikes are positive by construction.
        let buffer = match kind {
            SpreadKind::BullPut => (price - short_strike) / short_strike,
            SpreadKind::BearCall => (short_strike - price) / short_strike,
        };

        if buffer > safe_buffer {
            Self::Safe
        } else if buffer >= Decimal::ZERO {
            Self::Watch
        } else {
            Self::Itm
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Watch => write!(f, "WATCH"),
            Self::Itm => write!(f, "ITM"),
            Self::NoQuote => write!(f, "NO QUOTE"),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Buffer beyond the short strike (as a fraction of it) above which a
    /// position counts as safe.
    pub safe_buffer: Decimal,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            // 5%
            safe_buffer: Decimal::new(5, 2),
        }
    }
}

/// One report row per open position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRow {
    /// Position identifier.
    pub id: String,
    /// Underlying symbol.
    pub underlying: String,
    /// Spread kind.
    pub kind: SpreadKind,
    /// Number of spread units.
    pub quantity: u32,
    /// Short strike.
    pub short_strike: Decimal,
    /// Long strike.
    pub long_strike: Decimal,
    /// Credit received per unit.
    pub credit_received: Decimal,
    /// Current underlying price, if a quote was available.
    pub current_price: Option<Decimal>,
    /// Unrealized P&L in dollars, if priced.
    pub unrealized_pnl: Option<Decimal>,
    /// Unrealized P&L as a percentage of max loss, if priced.
    pub pnl_pct: Option<Decimal>,
    /// Risk status flag.
    pub status: PositionStatus,
    /// Quote failure detail for `NoQuote` rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_error: Option<String>,
}

/// Portfolio-level totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioTotals {
    /// Number of open positions in the report.
    pub open_positions: usize,
    /// Number of positions that received a quote.
    pub priced_positions: usize,
    /// Summed unrealized P&L across priced positions.
    pub unrealized_pnl: Decimal,
    /// Summed max profit across open positions.
    pub max_profit: Decimal,
    /// Summed max loss across open positions.
    pub max_risk: Decimal,
    /// Fraction of priced positions with positive unrealized P&L.
    pub win_rate: Option<Decimal>,
}

/// A full portfolio report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Report generation timestamp (RFC 3339).
    pub generated_at: String,
    /// Per-position rows.
    pub rows: Vec<PositionRow>,
    /// Aggregate totals.
    pub totals: PortfolioTotals,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(190), PositionStatus::Safe; "well above short strike")]
    #[test_case(dec!(189.05), PositionStatus::Safe; "just past the buffer")]
    #[test_case(dec!(189), PositionStatus::Watch; "exactly at the buffer")]
    #[test_case(dec!(182), PositionStatus::Watch; "inside the buffer")]
    #[test_case(dec!(180), PositionStatus::Watch; "at the short strike")]
    #[test_case(dec!(179.99), PositionStatus::Itm; "through the short strike")]
    fn classify_bull_put(price: Decimal, expected: PositionStatus) {
        let status =
            PositionStatus::classify(SpreadKind::BullPut, price, dec!(180), dec!(0.05));
        assert_eq!(status, expected);
    }

    #[test_case(dec!(380), PositionStatus::Safe; "well below short strike")]
    #[test_case(dec!(398), PositionStatus::Safe; "just past the buffer")]
    #[test_case(dec!(399), PositionStatus::Watch; "exactly at the buffer")]
    #[test_case(dec!(400), PositionStatus::Watch; "inside the buffer")]
    #[test_case(dec!(420), PositionStatus::Watch; "at the short strike")]
    #[test_case(dec!(421), PositionStatus::Itm; "through the short strike")]
    fn classify_bear_call(price: Decimal, expected: PositionStatus) {
        let status =
            PositionStatus::classify(SpreadKind::BearCall, price, dec!(420), dec!(0.05));
        assert_eq!(status, expected);
    }

    #[test]
    fn status_display() {
        assert_eq!(PositionStatus::Safe.to_string(), "SAFE");
        assert_eq!(PositionStatus::Watch.to_string(), "WATCH");
        assert_eq!(PositionStatus::Itm.to_string(), "ITM");
        assert_eq!(PositionStatus::NoQuote.to_string(), "NO QUOTE");
    }

    #[test]
    fn status_serde() {
        let json = serde_json::to_string(&PositionStatus::NoQuote).unwrap();
        assert_eq!(json, "\"no_quote\"");
    }

    #[test]
    fn report_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.safe_buffer, dec!(0.05));
    }
}
