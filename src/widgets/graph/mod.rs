//! Value-flow graph construction and rendering.
//!
//! # Module Structure
//!
//! - [`types`]: `FlowEdge`, `FlowGraph`, `FlowRow` and the header/pivot constants
//! - [`builders`]: `build_flow_graph`, the pure sender/receiver transform
//! - [`renderer`]: `FlowDiagram`, the ratatui widget
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::widgets::graph::{FlowDiagram, build_flow_graph};
//!
//! let graph = build_flow_graph(txn.senders.as_deref(), txn.receivers.as_deref());
//! frame.render_widget(FlowDiagram::new(&graph, theme.palette()), area);
//! ```

pub mod builders;
pub mod renderer;
pub mod types;


pub use builders::build_flow_graph;
pub use renderer::FlowDiagram;
pub use types::FlowGraph;
