//! Transaction types.
//!
//! This module defines the transaction record returned by the data service,
//! its sender/receiver legs, and the externally supplied table of
//! transaction type names.

use serde::{Deserialize, Serialize};

use crate::widgets::graph::{FlowGraph, build_flow_graph};

// ============================================================================
// Transaction Legs
// ============================================================================

/// A party that contributed value to a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sender {
    pub sender_key: String,
    pub amount: f64,
}

/// A party that received value from a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    pub receiver_key: String,
    pub amount: f64,
}

// ============================================================================
// Transaction
// ============================================================================

/// Full transaction record as resolved by the data service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub txn_hash: String,
    /// Execution status as reported by the service.
    pub status: String,
    /// Transferred value.
    pub amount: f64,
    /// Index into the [`TxnTypeNames`] table.
    #[serde(rename = "type")]
    pub txn_type: usize,
    pub nonce: u64,
    pub fee: f64,
    /// Value sources, absent when the service has none to show.
    #[serde(default)]
    pub senders: Option<Vec<Sender>>,
    /// Value sinks, absent when the service has none to show.
    #[serde(default)]
    pub receivers: Option<Vec<Receiver>>,
}

impl Transaction {
    /// Builds the value-flow graph for this transaction.
    #[must_use]
    pub fn flow_graph(&self) -> FlowGraph {
        build_flow_graph(self.senders.as_deref(), self.receivers.as_deref())
    }
}

// ============================================================================
// Type Names
// ============================================================================

/// Lookup table from a transaction's numeric `type` to a display name.
///
/// The table is supplied from configuration; the index on the record is
/// never modified, only looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxnTypeNames(Vec<String>);

impl TxnTypeNames {
    #[cfg(test)]
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// The configured name for `index`, if there is one.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Display label for `index`, falling back to `Unknown (<index>)`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.name(index)
            .map_or_else(|| format!("Unknown ({index})"), str::to_string)
    }
}

impl Default for TxnTypeNames {
    /// EIP-2718 envelope types.
    fn default() -> Self {
        Self(
            ["Legacy", "AccessList", "DynamicFee", "Blob", "SetCode"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
