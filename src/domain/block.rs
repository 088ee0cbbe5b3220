//! Block types.
//!
//! A [`Block`] is the record the data service returns for a block identifier.
//! Its `transactions` field holds only identifiers; the full records are
//! fetched on drill-down.

use serde::{Deserialize, Serialize};

// ============================================================================
// Helper Functions
// ============================================================================

/// Render a service timestamp for display.
///
/// RFC 3339 input becomes `YYYY-MM-DD HH:MM:SS`. Anything else falls back to
/// the plain textual rule of replacing `T` with a space and dropping `Z`.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.replace('T', " ").replace('Z', ""),
    }
}

// ============================================================================
// Sidecar
// ============================================================================

/// Auxiliary data blob attached to a block. Display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideCar {
    /// Blob identifier.
    pub id: String,
    /// Blob size in bytes.
    pub size: u64,
}

// ============================================================================
// Block
// ============================================================================

/// Full block record as resolved by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block identifier.
    pub block_hash: String,
    /// Parent block identifier.
    pub previous_block_hash: String,
    /// Sum of transferred value in the block.
    pub total_amount: f64,
    /// Sum of fees paid in the block.
    pub total_fee: f64,
    /// Transaction count as reported by the service.
    pub txn_count: u64,
    /// Raw timestamp string.
    pub time_stamp: String,
    /// Miner address.
    pub miner: String,
    pub nonce: u64,
    pub difficulty: f64,
    pub height: u64,
    /// Ordered transaction identifiers.
    #[serde(default)]
    pub transactions: Vec<String>,
    /// Uncle block identifiers, if any.
    #[serde(default)]
    pub uncles: Option<Vec<String>>,
    /// Sidecar descriptors, if any.
    #[serde(default)]
    pub sidecar: Option<Vec<SideCar>>,
}

impl Block {
    /// Uncle identifiers, empty when the service sent none.
    #[must_use]
    pub fn uncles(&self) -> &[String] {
        self.uncles.as_deref().unwrap_or_default()
    }

    /// Sidecar descriptors, empty when the service sent none.
    #[must_use]
    pub fn sidecars(&self) -> &[SideCar] {
        self.sidecar.as_deref().unwrap_or_default()
    }

    /// `true` when `txn_count` disagrees with the identifier list.
    ///
    /// This is a data service contract violation that is shown to the user
    /// but never treated as an error.
    #[must_use]
    pub fn has_txn_count_mismatch(&self) -> bool {
        self.txn_count != self.transactions.len() as u64
    }

    /// Display form of `time_stamp`.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.time_stamp)
    }
}

// ============================================================================
// Tests
// ============================================================================
