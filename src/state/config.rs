//! Application configuration with persistence.
//!
//! The configuration file lives in the platform config directory (see
//! [`AppPaths`]) as `blockdrill/config.json`. Every field is optional in the
//! file; missing fields take their defaults.
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.theme = config.theme.toggle();
//! config.save()?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::navigation::NavigationConfig;
use super::platform::paths::AppPaths;
use crate::client::HttpConfig;
use crate::constants::{DEFAULT_API_URL, DEFAULT_EXPLORER_URL, DEFAULT_FETCH_TIMEOUT_SECS};
use crate::domain::TxnTypeNames;
use crate::theme::FlowTheme;

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Root URL of the block/transaction data service.
    pub api_url: String,
    /// Root URL of the external explorer used for deep links.
    pub explorer_url: String,
    /// Human-readable names indexed by a transaction's numeric type.
    pub txn_types: TxnTypeNames,
    /// Upper bound on a single fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Abort a pending fetch when a newer drill-down of the same kind starts.
    pub cancel_superseded: bool,
    /// Flow diagram palette.
    pub theme: FlowTheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            txn_types: TxnTypeNames::default(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            cancel_superseded: false,
            theme: FlowTheme::default(),
        }
    }
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be located, read or parsed.
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not a valid configuration.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be located, serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    // ========================================================================
    // Derived Settings
    // ========================================================================

    /// Fetch timeout, never shorter than one second.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }

    #[must_use]
    pub fn navigation_config(&self) -> NavigationConfig {
        NavigationConfig {
            fetch_timeout: self.fetch_timeout(),
            cancel_superseded: self.cancel_superseded,
        }
    }

    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(self.fetch_timeout())
    }

    /// Deep link to a block in the external explorer.
    #[must_use]
    pub fn explorer_block_url(&self, block_hash: &str) -> String {
        format!("{}/block/{block_hash}", self.explorer_url.trim_end_matches('/'))
    }

    /// Deep link to a transaction in the external explorer.
    #[must_use]
    pub fn explorer_txn_url(&self, txn_hash: &str) -> String {
        format!("{}/tx/{txn_hash}", self.explorer_url.trim_end_matches('/'))
    }
}

// ============================================================================
// Tests
// ============================================================================
