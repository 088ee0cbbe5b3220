//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

use crate::client::DataService;
use crate::domain::{Block, ExplorerError, Receiver, Sender, SideCar, Transaction};
use crate::state::{App, AppConfig, StartupTarget};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct BlockMother;

impl BlockMother {
    #[must_use]
    pub fn basic(block_hash: &str) -> Block {
        Block {
            block_hash: block_hash.to_string(),
            previous_block_hash: "0xparent".to_string(),
            total_amount: 12.5,
            total_fee: 0.25,
            txn_count: 0,
            time_stamp: "2024-03-13T13:55:35Z".to_string(),
            miner: "0xminer".to_string(),
            nonce: 7,
            difficulty: 0.0,
            height: 19_426_587,
            transactions: Vec::new(),
            uncles: None,
            sidecar: None,
        }
    }

    /// A block whose `txn_count` matches its transaction list.
    #[must_use]
    pub fn with_transactions(block_hash: &str, txn_hashes: &[&str]) -> Block {
        Block {
            txn_count: txn_hashes.len() as u64,
            transactions: txn_hashes.iter().map(|hash| hash.to_string()).collect(),
            ..Self::basic(block_hash)
        }
    }

    #[must_use]
    pub fn with_uncles(block_hash: &str, uncle_hashes: &[&str]) -> Block {
        Block {
            uncles: Some(uncle_hashes.iter().map(|hash| hash.to_string()).collect()),
            ..Self::basic(block_hash)
        }
    }

    /// Two uncles, two transactions and one sidecar.
    #[must_use]
    pub fn full(block_hash: &str) -> Block {
        Block {
            uncles: Some(vec!["0xu1".to_string(), "0xu2".to_string()]),
            sidecar: Some(vec![SideCar {
                id: "blob-1".to_string(),
                size: 131_072,
            }]),
            ..Self::with_transactions(block_hash, &["0xt1", "0xt2"])
        }
    }
}

pub struct TransactionMother;

impl TransactionMother {
    /// Two senders funding one receiver.
    #[must_use]
    pub fn transfer(txn_hash: &str) -> Transaction {
        Transaction {
            txn_hash: txn_hash.to_string(),
            status: "success".to_string(),
            amount: 7.5,
            txn_type: 2,
            nonce: 11,
            fee: 0.0021,
            senders: Some(LegMother::senders(&[("0xs1", 3.0), ("0xs2", 4.5)])),
            receivers: Some(LegMother::receivers(&[("0xr1", 7.5)])),
        }
    }

    /// A transaction with no sender or receiver lists at all.
    #[must_use]
    pub fn without_legs(txn_hash: &str) -> Transaction {
        Transaction {
            senders: None,
            receivers: None,
            ..Self::transfer(txn_hash)
        }
    }
}

pub struct LegMother;

impl LegMother {
    #[must_use]
    pub fn senders(legs: &[(&str, f64)]) -> Vec<Sender> {
        legs.iter()
            .map(|(key, amount)| Sender {
                sender_key: key.to_string(),
                amount: *amount,
            })
            .collect()
    }

    #[must_use]
    pub fn receivers(legs: &[(&str, f64)]) -> Vec<Receiver> {
        legs.iter()
            .map(|(key, amount)| Receiver {
                receiver_key: key.to_string(),
                amount: *amount,
            })
            .collect()
    }

    #[must_use]
    pub fn numbered_senders(count: usize) -> Vec<Sender> {
        (0..count)
            .map(|i| Sender {
                sender_key: format!("0xs{i}"),
                amount: i as f64 + 0.5,
            })
            .collect()
    }

    #[must_use]
    pub fn numbered_receivers(count: usize) -> Vec<Receiver> {
        (0..count)
            .map(|i| Receiver {
                receiver_key: format!("0xr{i}"),
                amount: i as f64 + 0.25,
            })
            .collect()
    }
}

// ============================================================================
// JSON Test Data Factories
// ============================================================================

pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn block() -> serde_json::Value {
        serde_json::json!({
            "block_hash": "0xb1",
            "previous_block_hash": "0xb0",
            "total_amount": 12.5,
            "total_fee": 0.25,
            "txn_count": 2,
            "time_stamp": "2024-03-13T13:55:35Z",
            "miner": "0xminer",
            "nonce": 7,
            "difficulty": 0,
            "height": 19_426_587_u64,
            "transactions": ["0xt1", "0xt2"],
            "uncles": ["0xu1"],
            "sidecar": null
        })
    }

    #[must_use]
    pub fn transaction() -> serde_json::Value {
        serde_json::json!({
            "txn_hash": "0xt1",
            "status": "success",
            "amount": 7.5,
            "type": 2,
            "nonce": 11,
            "fee": 0.0021,
            "senders": [
                {"sender_key": "0xs1", "amount": 3.0},
                {"sender_key": "0xs2", "amount": 4.5}
            ],
            "receivers": [{"receiver_key": "0xr1", "amount": 7.5}]
        })
    }
}

// ============================================================================
// Scripted Data Service
// ============================================================================

/// How the mock answers a single identifier.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Record(T),
    NotFound,
    Malformed,
    /// Never resolves.
    Hang,
    /// Panics inside the fetch task.
    Panic,
}

#[derive(Debug, Clone)]
struct Scripted<T> {
    reply: Reply<T>,
    delay: Duration,
}

/// In-memory [`DataService`] with per-identifier replies and delays.
///
/// Unknown identifiers resolve to `NotFound` immediately. Delays use
/// `tokio::time::sleep`, so paused-clock tests advance them instantly.
#[derive(Debug, Default)]
pub struct MockService {
    blocks: HashMap<String, Scripted<Block>>,
    transactions: HashMap<String, Scripted<Transaction>>,
    calls: Mutex<Vec<String>>,
}

impl MockService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_block(self, block: Block) -> Self {
        self.with_block_after(block, Duration::ZERO)
    }

    #[must_use]
    pub fn with_block_after(mut self, block: Block, delay: Duration) -> Self {
        let id = block.block_hash.clone();
        self.blocks.insert(
            id,
            Scripted {
                reply: Reply::Record(block),
                delay,
            },
        );
        self
    }

    #[must_use]
    pub fn with_block_reply(mut self, id: &str, reply: Reply<Block>, delay: Duration) -> Self {
        self.blocks.insert(id.to_string(), Scripted { reply, delay });
        self
    }

    #[must_use]
    pub fn with_transaction(self, txn: Transaction) -> Self {
        self.with_transaction_after(txn, Duration::ZERO)
    }

    #[must_use]
    pub fn with_transaction_after(mut self, txn: Transaction, delay: Duration) -> Self {
        let id = txn.txn_hash.clone();
        self.transactions.insert(
            id,
            Scripted {
                reply: Reply::Record(txn),
                delay,
            },
        );
        self
    }

    #[must_use]
    pub fn with_transaction_reply(
        mut self,
        id: &str,
        reply: Reply<Transaction>,
        delay: Duration,
    ) -> Self {
        self.transactions
            .insert(id.to_string(), Scripted { reply, delay });
        self
    }

    /// Every identifier requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, id: &str) {
        self.calls.lock().unwrap().push(id.to_string());
    }

    #[must_use]
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

async fn play<T>(
    scripted: Option<Scripted<T>>,
    entity: &'static str,
    id: &str,
) -> Result<T, ExplorerError> {
    let Some(Scripted { reply, delay }) = scripted else {
        return Err(ExplorerError::not_found(entity, id));
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match reply {
        Reply::Record(record) => Ok(record),
        Reply::NotFound => Err(ExplorerError::not_found(entity, id)),
        Reply::Malformed => Err(ExplorerError::parse(format!("unexpected {entity} payload"))),
        Reply::Hang => std::future::pending().await,
        Reply::Panic => panic!("scripted panic for {entity} {id}"),
    }
}

impl DataService for MockService {
    async fn fetch_block(&self, block_id: &str) -> Result<Block, ExplorerError> {
        self.record(block_id);
        play(self.blocks.get(block_id).cloned(), "block", block_id).await
    }

    async fn fetch_transaction(&self, txn_id: &str) -> Result<Transaction, ExplorerError> {
        self.record(txn_id);
        play(self.transactions.get(txn_id).cloned(), "transaction", txn_id).await
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(120, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Service knowing block `0xb1` (see [`BlockMother::full`]), its uncles
/// `0xu1`/`0xu2` and transactions `0xt1`/`0xt2`.
#[fixture]
pub fn mock_service() -> MockService {
    MockService::new()
        .with_block(BlockMother::full("0xb1"))
        .with_block(BlockMother::with_transactions("0xu1", &["0xt9"]))
        .with_block(BlockMother::basic("0xu2"))
        .with_transaction(TransactionMother::transfer("0xt1"))
        .with_transaction(TransactionMother::without_legs("0xt2"))
}

/// App over [`mock_service`] that has not issued its startup fetch yet.
#[fixture]
pub fn mock_app(mock_service: MockService) -> App<MockService> {
    App::with_service(
        mock_service,
        AppConfig::default(),
        StartupTarget::Block("0xb1".to_string()),
    )
}

/// Concatenates every cell symbol of the rendered buffer.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}
