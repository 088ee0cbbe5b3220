//! Flow graph type definitions.
//!
//! A [`FlowGraph`] is a bipartite weighted-edge list: every sender flows into
//! the transaction pivot node and the pivot flows out to every receiver. The
//! pivot is the empty-string node [`FLOW_PIVOT`], so the edges read as
//! `(sender, "", amount)` followed by `("", receiver, amount)`.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::domain::{Receiver, Sender};

// ============================================================================
// Constants
// ============================================================================

/// Leading sentinel row consumed by the rendering layer. Not a data edge.
pub const FLOW_HEADER: [&str; 3] = ["From", "To", "Amount"];

/// Node label standing for the transaction itself.
pub const FLOW_PIVOT: &str = "";

// ============================================================================
// FlowEdge
// ============================================================================

/// A directed weighted edge `(source, target, value)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: String,
    pub target: String,
    /// Passed through unchanged; sign and magnitude are not validated.
    pub value: f64,
}

impl FlowEdge {
    /// Value leaving a sender into the transaction.
    #[must_use]
    pub fn from_sender(sender: &Sender) -> Self {
        Self {
            source: sender.sender_key.clone(),
            target: FLOW_PIVOT.to_string(),
            value: sender.amount,
        }
    }

    /// Value entering a receiver from the transaction.
    #[must_use]
    pub fn from_receiver(receiver: &Receiver) -> Self {
        Self {
            source: FLOW_PIVOT.to_string(),
            target: receiver.receiver_key.clone(),
            value: receiver.amount,
        }
    }
}

// ============================================================================
// FlowRow
// ============================================================================

/// One row of the renderer contract: the header sentinel or a data edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowRow<'a> {
    Header,
    Edge(&'a FlowEdge),
}

impl Serialize for FlowRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Header => FLOW_HEADER.serialize(serializer),
            Self::Edge(edge) => (&edge.source, &edge.target, edge.value).serialize(serializer),
        }
    }
}

// ============================================================================
// FlowGraph
// ============================================================================

/// Ordered edge list: all sender edges, then all receiver edges.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowGraph {
    edges: Vec<FlowEdge>,
    /// Number of leading edges that come from senders.
    outflow_count: usize,
}

impl FlowGraph {
    pub(super) fn from_parts(edges: Vec<FlowEdge>, outflow_count: usize) -> Self {
        debug_assert!(outflow_count <= edges.len());
        Self {
            edges,
            outflow_count,
        }
    }

    /// Row count including the header sentinel.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.edges.len()
    }

    /// `true` when there are no data edges (the header alone draws nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All data edges in order.
    #[cfg(test)]
    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Edges from senders into the pivot.
    #[must_use]
    pub fn outflows(&self) -> &[FlowEdge] {
        &self.edges[..self.outflow_count]
    }

    /// Edges from the pivot into receivers.
    #[must_use]
    pub fn inflows(&self) -> &[FlowEdge] {
        &self.edges[self.outflow_count..]
    }

    /// Largest absolute edge value, used to scale bars.
    #[must_use]
    pub fn max_magnitude(&self) -> f64 {
        self.edges
            .iter()
            .map(|edge| edge.value.abs())
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max)
    }

    /// Header row followed by every edge.
    pub fn rows(&self) -> impl Iterator<Item = FlowRow<'_>> {
        std::iter::once(FlowRow::Header).chain(self.edges.iter().map(FlowRow::Edge))
    }
}

/// Serializes as `[["From","To","Amount"], [source, target, value], ...]`.
impl Serialize for FlowGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for row in self.rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}
