//! Position Errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a position violates its construction invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Short and long strikes are equal, so the spread has no width.
    #[error("Position {id}: short and long strikes are both {strike}, spread has zero width")]
    ZeroWidth {
        /// Position identifier.
        id: String,
        /// The shared strike value.
        strike: Decimal,
    },

    /// Strikes are ordered the wrong way for the spread kind.
    #[error(
        "Position {id}: strikes {short_strike}/{long_strike} are inverted for a {kind} spread"
    )]
    InvertedStrikes {
        /// Position identifier.
        id: String,
        /// The spread kind.
        kind: crate::domain::SpreadKind,
        /// Short strike.
        short_strike: Decimal,
        /// Long strike.
        long_strike: Decimal,
    },

    /// A strike is zero or negative.
    #[error("Position {id}: strike {strike} must be positive")]
    NonPositiveStrike {
        /// Position identifier.
        id: String,
        /// The offending strike.
        strike: Decimal,
    },

    /// Credit is negative or exceeds the strike width.
    #[error("Position {id}: credit {credit} outside [0, {width}] (strike width)")]
    InvalidCredit {
        /// Position identifier.
        id: String,
        /// Credit received per unit.
        credit: Decimal,
        /// Strike width.
        width: Decimal,
    },

    /// Quantity is zero.
    #[error("Position {id}: quantity must be at least 1")]
    InvalidQuantity {
        /// Position identifier.
        id: String,
    },
}
