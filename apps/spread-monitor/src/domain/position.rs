//! Credit-spread position and the expiration payoff model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::PositionError;
use super::spread_kind::SpreadKind;

/// Option contract multiplier (one contract controls 100 shares).
const CONTRACT_MULTIPLIER: Decimal = Decimal::ONE_HUNDRED;

/// Wire/file form of a position, prior to invariant checks.
///
/// This is the schema of `trades.json` entries. Convert with
/// [`CreditSpreadPosition::try_from`] to get a validated position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Position identifier (e.g. "AAPL-20260219-001").
    pub id: String,
    /// Underlying symbol.
    pub underlying: String,
    /// Spread kind.
    pub kind: SpreadKind,
    /// Number of spread units.
    pub quantity: u32,
    /// Short (sold) strike.
    pub short_strike: Decimal,
    /// Long (bought) strike.
    pub long_strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Credit received per unit, in price-per-share terms.
    pub credit_received: Decimal,
    /// Last marked spread value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_spread_value: Option<Decimal>,
    /// Last marked unrealized P&L.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unrealized_pnl: Option<Decimal>,
    /// Realized P&L, set only when the position is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realized_pnl: Option<Decimal>,
}

/// Point-in-time valuation of a position at a given underlying price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlSnapshot {
    /// Unrealized P&L in dollars.
    pub unrealized_pnl: Decimal,
    /// Unrealized P&L as a percentage of max loss (0 when max loss is 0).
    pub pnl_pct: Decimal,
    /// Spread value per unit: 0 at max profit, strike width at max loss.
    pub spread_value: Decimal,
}

/// An open credit-spread position.
///
/// Invariants are enforced at construction: non-zero width, positive
/// strikes ordered per the spread kind, credit within `[0, width]`, and
/// quantity of at least one unit.
///
/// Valuation uses the payoff at expiration: max profit beyond the short
/// strike, max loss beyond the long strike, and linear interpolation
/// strictly between the strikes. No time value is modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PositionRecord")]
pub struct CreditSpreadPosition {
    id: String,
    underlying: String,
    kind: SpreadKind,
    quantity: u32,
    short_strike: Decimal,
    long_strike: Decimal,
    expiration: NaiveDate,
    entry_date: NaiveDate,
    credit_received: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_spread_value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unrealized_pnl: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    realized_pnl: Option<Decimal>,
}

impl TryFrom<PositionRecord> for CreditSpreadPosition {
    type Error = PositionError;

    fn try_from(record: PositionRecord) -> Result<Self, Self::Error> {
        if record.quantity == 0 {
            return Err(PositionError::InvalidQuantity { id: record.id });
        }

        for strike in [record.short_strike, record.long_strike] {
            if strike <= Decimal::ZERO {
                return Err(PositionError::NonPositiveStrike {
                    id: record.id.clone(),
                    strike,
                });
            }
        }

        if record.short_strike == record.long_strike {
            return Err(PositionError::ZeroWidth {
                id: record.id,
                strike: record.short_strike,
            });
        }

        if !record
            .kind
            .strikes_ordered(record.short_strike, record.long_strike)
        {
            return Err(PositionError::InvertedStrikes {
                id: record.id,
                kind: record.kind,
                short_strike: record.short_strike,
                long_strike: record.long_strike,
            });
        }

        let width = (record.short_strike - record.long_strike).abs();
        if record.credit_received < Decimal::ZERO || record.credit_received > width {
            return Err(PositionError::InvalidCredit {
                id: record.id,
                credit: record.credit_received,
                width,
            });
        }

        Ok(Self {
            id: record.id,
            underlying: record.underlying,
            kind: record.kind,
            quantity: record.quantity,
            short_strike: record.short_strike,
            long_strike: record.long_strike,
            expiration: record.expiration,
            entry_date: record.entry_date,
            credit_received: record.credit_received,
            current_spread_value: record.current_spread_value,
            unrealized_pnl: record.unrealized_pnl,
            realized_pnl: record.realized_pnl,
        })
    }
}

impl CreditSpreadPosition {
    /// Get the position identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the underlying symbol.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Get the spread kind.
    #[must_use]
    pub const fn kind(&self) -> SpreadKind {
        self.kind
    }

    /// Get the number of spread units.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the short strike.
    #[must_use]
    pub const fn short_strike(&self) -> Decimal {
        self.short_strike
    }

    /// Get the long strike.
    #[must_use]
    pub const fn long_strike(&self) -> Decimal {
        self.long_strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Get the entry date.
    #[must_use]
    pub const fn entry_date(&self) -> NaiveDate {
        self.entry_date
    }

    /// Get the credit received per unit.
    #[must_use]
    pub const fn credit_received(&self) -> Decimal {
        self.credit_received
    }

    /// Get the last marked spread value, if the position has been marked.
    #[must_use]
    pub const fn current_spread_value(&self) -> Option<Decimal> {
        self.current_spread_value
    }

    /// Get the last marked unrealized P&L, if the position has been marked.
    #[must_use]
    pub const fn unrealized_pnl(&self) -> Option<Decimal> {
        self.unrealized_pnl
    }

    /// Get the realized P&L, set only when the position is closed.
    #[must_use]
    pub const fn realized_pnl(&self) -> Option<Decimal> {
        self.realized_pnl
    }

    /// Check if the position is still open (no realized P&L recorded).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.realized_pnl.is_none()
    }

    /// Strike width: absolute distance between the strikes.
    #[must_use]
    pub fn width(&self) -> Decimal {
        (self.short_strike - self.long_strike).abs()
    }

    /// Maximum profit: the credit collected across all units.
    #[must_use]
    pub fn max_profit(&self) -> Decimal {
        self.credit_received * Decimal::from(self.quantity) * CONTRACT_MULTIPLIER
    }

    /// Maximum loss: strike width less the credit, across all units.
    #[must_use]
    pub fn max_loss(&self) -> Decimal {
        (self.width() - self.credit_received) * Decimal::from(self.quantity) * CONTRACT_MULTIPLIER
    }

    /// Value the position at the given underlying price.
    ///
    /// Pure function of the position's static fields; cached mark fields
    /// are not read or written. Width is non-zero by construction, so the
    /// interpolation never divides by zero.
    #[must_use]
    pub fn pnl_at(&self, underlying_price: Decimal) -> PnlSnapshot {
        let width = self.width();
        let max_profit = self.max_profit();
        let max_loss = self.max_loss();

        // Fraction of the way from the long strike toward the short strike,
        // in [0, 1): 1 would be the max-profit boundary, 0 the max-loss one.
        let distance = match self.kind {
            SpreadKind::BullPut => {
                if underlying_price >= self.short_strike {
                    return Self::snapshot(max_profit, max_loss, Decimal::ZERO);
                }
                if underlying_price <= self.long_strike {
                    return Self::snapshot(-max_loss, max_loss, width);
                }
                (underlying_price - self.long_strike) / width
            }
            SpreadKind::BearCall => {
                if underlying_price <= self.short_strike {
                    return Self::snapshot(max_profit, max_loss, Decimal::ZERO);
                }
                if underlying_price >= self.long_strike {
                    return Self::snapshot(-max_loss, max_loss, width);
                }
                (self.long_strike - underlying_price) / width
            }
        };

        let remaining = Decimal::ONE - distance;
        let pnl = max_profit - remaining * max_loss;
        Self::snapshot(pnl, max_loss, width * remaining)
    }

    /// Mark the position at the given underlying price, updating the
    /// cached `current_spread_value` and `unrealized_pnl` fields.
    ///
    /// Marking twice at the same price yields the same result.
    pub fn mark(&mut self, underlying_price: Decimal) -> PnlSnapshot {
        let snapshot = self.pnl_at(underlying_price);
        self.current_spread_value = Some(snapshot.spread_value);
        self.unrealized_pnl = Some(snapshot.unrealized_pnl);
        snapshot
    }

    fn snapshot(pnl: Decimal, max_loss: Decimal, spread_value: Decimal) -> PnlSnapshot {
        let pnl_pct = if max_loss == Decimal::ZERO {
            Decimal::ZERO
        } else {
            pnl / max_loss * CONTRACT_MULTIPLIER
        };
        PnlSnapshot {
            unrealized_pnl: pnl,
            pnl_pct,
            spread_value,
        }
    }
}
