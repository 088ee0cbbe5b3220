//! Domain types for the blockdrill viewer.
//!
//! - [`error`] - Data service errors and the fetch failure classification
//! - [`block`] - Block records and sidecars
//! - [`transaction`] - Transaction records, sender/receiver legs, type names

// ============================================================================
// Module Declarations
// ============================================================================

pub mod block;
pub mod error;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use block::{Block, SideCar};
pub use error::{EntityKind, ExplorerError, FetchFailed};
pub use transaction::{Receiver, Sender, Transaction, TxnTypeNames};
