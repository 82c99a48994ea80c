//! Text rendering for portfolio reports.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use super::types::PortfolioReport;

/// Format a dollar amount with 2 decimal places.
#[must_use]
pub fn format_money(value: Decimal) -> String {
    format!("{value:.2}")
}

/// Format a fraction as a percentage string.
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", value * Decimal::ONE_HUNDRED)
}

/// Format an optional dollar amount, "N/A" when absent.
#[must_use]
pub fn format_opt_money(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_money)
}

/// Render the report as a text table with a totals block.
#[must_use]
pub fn render_table(report: &PortfolioReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<10} {:<9} {:>8} {:>8} {:>7} {:>4} {:>9} {:>10} {:>9}  {}",
        "SYMBOL", "KIND", "SHORT", "LONG", "CREDIT", "QTY", "PRICE", "P&L", "P&L%", "STATUS"
    );
    let _ = writeln!(out, "{}", "-".repeat(96));

    for row in &report.rows {
        let pnl_pct = row
            .pnl_pct
            .map_or_else(|| "N/A".to_string(), |pct| format!("{pct:.2}%"));

        let _ = writeln!(
            out,
            "{:<10} {:<9} {:>8} {:>8} {:>7} {:>4} {:>9} {:>10} {:>9}  {}",
            row.underlying,
            row.kind.to_string(),
            format_money(row.short_strike),
            format_money(row.long_strike),
            format_money(row.credit_received),
            row.quantity,
            format_opt_money(row.current_price),
            format_opt_money(row.unrealized_pnl),
            pnl_pct,
            row.status,
        );
    }

    let totals = &report.totals;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Open positions: {} ({} priced)",
        totals.open_positions, totals.priced_positions
    );
    let _ = writeln!(out, "Unrealized P&L: {}", format_money(totals.unrealized_pnl));
    let _ = writeln!(out, "Max profit:     {}", format_money(totals.max_profit));
    let _ = writeln!(out, "Max risk:       {}", format_money(totals.max_risk));
    let _ = writeln!(
        out,
        "Win rate:       {}",
        totals.win_rate.map_or_else(|| "N/A".to_string(), format_pct)
    );

    out
}
