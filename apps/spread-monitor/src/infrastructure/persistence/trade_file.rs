//! JSON trade file store.
//!
//! Positions live in a flat JSON array (`trades.json`); the schema is the
//! serde form of [`PositionRecord`]. Records that violate position
//! invariants fail the load with a typed error instead of being skipped.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{CreditSpreadPosition, PositionError, PositionRecord};

/// Trade store errors.
#[derive(Debug, Error)]
pub enum TradeStoreError {
    /// Failed to read or write the trade file.
    #[error("Failed to access trade file '{path}': {source}")]
    Io {
        /// Path to the trade file.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The trade file is not valid JSON for the expected schema.
    #[error("Failed to parse trade file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record in the trade file violates position invariants.
    #[error("Invalid position in trade file: {0}")]
    InvalidPosition(#[from] PositionError),
}

/// A JSON file holding the open positions.
#[derive(Debug, Clone)]
pub struct TradeFile {
    path: PathBuf,
}

impl TradeFile {
    /// Create a store for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the trade file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate all positions from the trade file.
    pub fn load(&self) -> Result<Vec<CreditSpreadPosition>, TradeStoreError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            TradeStoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        let records: Vec<PositionRecord> = serde_json::from_str(&contents)?;

        records
            .into_iter()
            .map(|record| CreditSpreadPosition::try_from(record).map_err(TradeStoreError::from))
            .collect()
    }

    /// Write the positions back to the trade file (pretty-printed).
    pub fn save(&self, positions: &[CreditSpreadPosition]) -> Result<(), TradeStoreError> {
        let json = serde_json::to_string_pretty(positions)?;
        std::fs::write(&self.path, json).map_err(|source| TradeStoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
