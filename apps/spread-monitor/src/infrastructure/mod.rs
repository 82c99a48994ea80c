//! Infrastructure layer: adapters for quotes and the trade file.

pub mod persistence;
pub mod price_feed;
