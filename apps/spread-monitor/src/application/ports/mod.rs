//! Ports (interfaces) for external collaborators.

pub mod price_feed_port;

pub use price_feed_port::{PriceFeedError, PriceFeedPort};
