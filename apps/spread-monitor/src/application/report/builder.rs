//! Report builder: marks each open position against a fresh quote and
//! aggregates portfolio totals.

use rust_decimal::Decimal;

use crate::application::ports::PriceFeedPort;
use crate::domain::CreditSpreadPosition;

use super::types::{PortfolioReport, PortfolioTotals, PositionRow, PositionStatus, ReportConfig};

/// Build a portfolio report for the given positions.
///
/// Quotes are fetched one symbol at a time; a failed quote produces a
/// `NoQuote` row carrying the error rather than a fabricated price, and
/// that row is excluded from the priced totals. Closed positions (those
/// with realized P&L) are skipped.
pub async fn build_report(
    positions: &mut [CreditSpreadPosition],
    price_feed: &dyn PriceFeedPort,
    config: &ReportConfig,
) -> PortfolioReport {
    let mut rows = Vec::with_capacity(positions.len());
    let mut unrealized_pnl = Decimal::ZERO;
    let mut max_profit = Decimal::ZERO;
    let mut max_risk = Decimal::ZERO;
    let mut priced = 0usize;
    let mut winners = 0usize;

    for position in positions.iter_mut() {
        if !position.is_open() {
            tracing::debug!(id = %position.id(), "Skipping closed position");
            continue;
        }

        max_profit += position.max_profit();
        max_risk += position.max_loss();

        let row = match price_feed.get_last_price(position.underlying()).await {
            Ok(price) => {
                let snapshot = position.mark(price);
                let status = PositionStatus::classify(
                    position.kind(),
                    price,
                    position.short_strike(),
                    config.safe_buffer,
                );

                unrealized_pnl += snapshot.unrealized_pnl;
                priced += 1;
                if snapshot.unrealized_pnl > Decimal::ZERO {
                    winners += 1;
                }

                row_for(position, Some(price), Some(snapshot.unrealized_pnl), Some(snapshot.pnl_pct), status, None)
            }
            Err(error) => {
                tracing::warn!(
                    id = %position.id(),
                    symbol = %position.underlying(),
                    error = %error,
                    "No quote for position, excluding from totals"
                );
                row_for(position, None, None, None, PositionStatus::NoQuote, Some(error.to_string()))
            }
        };

        rows.push(row);
    }

    let win_rate = if priced == 0 {
        None
    } else {
        Some(Decimal::from(winners) / Decimal::from(priced))
    };

    PortfolioReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        totals: PortfolioTotals {
            open_positions: rows.len(),
            priced_positions: priced,
            unrealized_pnl,
            max_profit,
            max_risk,
            win_rate,
        },
        rows,
    }
}

fn row_for(
    position: &CreditSpreadPosition,
    current_price: Option<Decimal>,
    unrealized_pnl: Option<Decimal>,
    pnl_pct: Option<Decimal>,
    status: PositionStatus,
    quote_error: Option<String>,
) -> PositionRow {
    PositionRow {
        id: position.id().to_string(),
        underlying: position.underlying().to_string(),
        kind: position.kind(),
        quantity: position.quantity(),
        short_strike: position.short_strike(),
        long_strike: position.long_strike(),
        credit_received: position.credit_received(),
        current_price,
        unrealized_pnl,
        pnl_pct,
        status,
        quote_error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PositionRecord, SpreadKind};
    use crate::infrastructure::price_feed::MockPriceFeed;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn position(
        id: &str,
        underlying: &str,
        kind: SpreadKind,
        short: Decimal,
        long: Decimal,
        credit: Decimal,
        quantity: u32,
    ) -> CreditSpreadPosition {
        CreditSpreadPosition::try_from(PositionRecord {
            id: id.to_string(),
            underlying: underlying.to_string(),
            kind,
            quantity,
            short_strike: short,
            long_strike: long,
            expiration: NaiveDate::from_ymd_opt(2026, 2, 19).unwrap(),
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            credit_received: credit,
            current_spread_value: None,
            unrealized_pnl: None,
            realized_pnl: None,
        })
        .unwrap()
    }

    fn sample_positions() -> Vec<CreditSpreadPosition> {
        vec![
            position(
                "AAPL-001",
                "AAPL",
                SpreadKind::BullPut,
                dec!(180),
                dec!(175),
                dec!(0.40),
                2,
            ),
            position(
                "SPY-001",
                "SPY",
                SpreadKind::BearCall,
                dec!(420),
                dec!(425),
                dec!(0.35),
                1,
            ),
        ]
    }

    #[tokio::test]
    async fn report_rows_and_totals() {
        let feed = MockPriceFeed::new();
        feed.set_price("AAPL", dec!(195)); // safe, max profit
        feed.set_price("SPY", dec!(422.50)); // ITM, interpolated loss

        let mut positions = sample_positions();
        let report = build_report(&mut positions, &feed, &ReportConfig::default()).await;

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.totals.open_positions, 2);
        assert_eq!(report.totals.priced_positions, 2);

        let aapl = &report.rows[0];
        assert_eq!(aapl.status, PositionStatus::Safe);
        assert_eq!(aapl.unrealized_pnl, Some(dec!(80)));

        let spy = &report.rows[1];
        assert_eq!(spy.status, PositionStatus::Itm);
        assert_eq!(spy.unrealized_pnl, Some(dec!(-197.5)));

        // 80 - 197.5
        assert_eq!(report.totals.unrealized_pnl, dec!(-117.5));
        // 80 + 35
        assert_eq!(report.totals.max_profit, dec!(115));
        // 920 + 465
        assert_eq!(report.totals.max_risk, dec!(1385));
        // 1 winner of 2 priced
        assert_eq!(report.totals.win_rate, Some(dec!(0.5)));
    }

    #[tokio::test]
    async fn report_marks_positions() {
        let feed = MockPriceFeed::new();
        feed.set_price("AAPL", dec!(177.50));
        feed.set_price("SPY", dec!(400));

        let mut positions = sample_positions();
        let _ = build_report(&mut positions, &feed, &ReportConfig::default()).await;

        assert_eq!(positions[0].unrealized_pnl(), Some(dec!(-380)));
        assert_eq!(positions[1].unrealized_pnl(), Some(dec!(35)));
    }

    #[tokio::test]
    async fn missing_quote_excluded_from_totals() {
        let feed = MockPriceFeed::new();
        feed.set_price("AAPL", dec!(195));
        // No SPY price

        let mut positions = sample_positions();
        let report = build_report(&mut positions, &feed, &ReportConfig::default()).await;

        assert_eq!(report.totals.open_positions, 2);
        assert_eq!(report.totals.priced_positions, 1);
        assert_eq!(report.totals.unrealized_pnl, dec!(80));
        assert_eq!(report.totals.win_rate, Some(dec!(1)));

        let spy = &report.rows[1];
        assert_eq!(spy.status, PositionStatus::NoQuote);
        assert!(spy.current_price.is_none());
        assert!(spy.unrealized_pnl.is_none());
        assert!(spy.quote_error.is_some());

        // Unpriced positions still contribute their defined risk
        assert_eq!(report.totals.max_risk, dec!(1385));
    }

    #[tokio::test]
    async fn empty_portfolio() {
        let feed = MockPriceFeed::new();
        let mut positions = Vec::new();
        let report = build_report(&mut positions, &feed, &ReportConfig::default()).await;

        assert!(report.rows.is_empty());
        assert_eq!(report.totals.open_positions, 0);
        assert!(report.totals.win_rate.is_none());
        assert_eq!(report.totals.unrealized_pnl, Decimal::ZERO);
    }

    #[tokio::test]
    async fn report_serializes_to_json() {
        let feed = MockPriceFeed::new();
        feed.set_price("AAPL", dec!(195));
        feed.set_price("SPY", dec!(400));

        let mut positions = sample_positions();
        let report = build_report(&mut positions, &feed, &ReportConfig::default()).await;

        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"status\": \"safe\""));

        let parsed: PortfolioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows.len(), 2);
    }
}
