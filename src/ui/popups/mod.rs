//! Modal overlays drawn above the block view.

pub mod transaction;
