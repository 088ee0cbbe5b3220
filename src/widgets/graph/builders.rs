//! Flow graph construction from a transaction's sender/receiver lists.

use crate::domain::{Receiver, Sender};

use super::types::{FlowEdge, FlowGraph};

/// Build the value-flow graph for one transaction.
///
/// Each present list contributes one edge per entry, in input order; an
/// absent list contributes nothing. Sender edges always precede receiver
/// edges and the two blocks never interleave. Amounts are copied as-is.
///
/// The lists are independent: a missing receiver list still yields every
/// sender edge (and vice versa) instead of suppressing the whole graph.
///
/// Pure and total: the same inputs always produce an equal graph.
#[must_use]
pub fn build_flow_graph(senders: Option<&[Sender]>, receivers: Option<&[Receiver]>) -> FlowGraph {
    let senders = senders.unwrap_or_default();
    let receivers = receivers.unwrap_or_default();

    let mut edges = Vec::with_capacity(senders.len() + receivers.len());
    edges.extend(senders.iter().map(FlowEdge::from_sender));
    edges.extend(receivers.iter().map(FlowEdge::from_receiver));

    FlowGraph::from_parts(edges, senders.len())
}
