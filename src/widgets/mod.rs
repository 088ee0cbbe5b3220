//! Reusable widget components for the blockdrill TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Formatting for hashes, amounts and graph node labels
//! - [`graph`]: Value-flow graph model, builder and terminal renderer

pub mod graph;
pub mod helpers;

pub use graph::FlowDiagram;
