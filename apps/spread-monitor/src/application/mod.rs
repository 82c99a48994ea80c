//! Application layer: report building and port definitions.

pub mod ports;
pub mod report;
