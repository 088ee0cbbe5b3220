//! Data service clients for resolving blocks and transactions.
//!
//! The navigation layer talks to the data service only through the
//! [`DataService`] trait, so the HTTP client can be swapped for a scripted
//! service in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{DataService, ExplorerClient, HttpConfig};
//!
//! let client = ExplorerClient::new("https://api.example.org", HttpConfig::default())?;
//! let block = client.fetch_block("0xabc").await?;
//! ```

use std::future::Future;

use crate::domain::{Block, ExplorerError, Transaction};

pub mod explorer;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::ExplorerClient;
pub use http::HttpConfig;

// ============================================================================
// Data Service
// ============================================================================

/// Resolves identifiers to full block and transaction records.
///
/// Implementations own retries and caching, if any. Every error they return
/// is treated the same way by the caller.
pub trait DataService: Send + Sync + 'static {
    /// Fetch the block with the given identifier.
    fn fetch_block(
        &self,
        block_id: &str,
    ) -> impl Future<Output = Result<Block, ExplorerError>> + Send;

    /// Fetch the transaction with the given identifier.
    fn fetch_transaction(
        &self,
        txn_id: &str,
    ) -> impl Future<Output = Result<Transaction, ExplorerError>> + Send;
}
