//! Spread Kind Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of credit spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadKind {
    /// Bull put spread (short put above long put). Profits when the
    /// underlying stays above the short strike.
    BullPut,
    /// Bear call spread (short call below long call). Profits when the
    /// underlying stays below the short strike.
    BearCall,
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BullPut => write!(f, "Bull Put"),
            Self::BearCall => write!(f, "Bear Call"),
        }
    }
}

impl SpreadKind {
    /// Check whether the short/long strike ordering is valid for this kind.
    ///
    /// A bull put sells the higher-struck put; a bear call sells the
    /// lower-struck call.
    #[must_use]
    pub fn strikes_ordered(&self, short_strike: Decimal, long_strike: Decimal) -> bool {
        match self {
            Self::BullPut => short_strike > long_strike,
            Self::BearCall => short_strike < long_strike,
        }
    }
}
