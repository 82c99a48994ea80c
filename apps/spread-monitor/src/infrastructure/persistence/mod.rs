//! Persistence adapters for the trade file.

pub mod trade_file;

pub use trade_file::{TradeFile, TradeStoreError};
