//! Main content panels.

pub mod block;
