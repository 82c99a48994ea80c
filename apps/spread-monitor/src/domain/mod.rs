//! Domain layer for credit-spread positions.

pub mod errors;
pub mod position;
pub mod spread_kind;

pub use errors::PositionError;
pub use position::{CreditSpreadPosition, PnlSnapshot, PositionRecord};
pub use spread_kind::SpreadKind;
