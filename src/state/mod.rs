//! State management module for the blockdrill TUI application.
//!
//! The state is decomposed by concern:
//!
//! - [`NavigationController`] - what is on screen and the fetches that change it
//! - [`UiState`] - focus, selections and toasts
//! - [`AppConfig`] - persistent configuration
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                       App                        │
//! ├────────────────────────┬─────────────────────────┤
//! │ NavigationController   │        UiState          │
//! │  - current block       │  - focused section      │
//! │  - transaction modal   │  - selected rows        │
//! │  - in-flight fetches   │  - toasts               │
//! └────────────────────────┴─────────────────────────┘
//! ```

use crate::client::{DataService, ExplorerClient};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod navigation;
pub mod platform;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use navigation::{NavEvent, NavigationController};
pub use ui_state::{Section, UiState};

// ============================================================================
// Startup Options
// ============================================================================

/// The entity the app opens on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupTarget {
    /// Load a block into the block view.
    Block(String),
    /// Open a transaction in the modal with no block behind it.
    Transaction(String),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// Generic over the data service so tests can drive the full app with a
/// scripted service.
#[derive(Debug)]
pub struct App<S: DataService = ExplorerClient> {
    /// Navigation controller - current block, transaction modal, fetches.
    pub nav: NavigationController<S>,

    /// UI state - focus, selections, toasts.
    pub ui: UiState,

    /// Effective configuration (file merged with CLI overrides).
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for the loading indicator.
    pub animation_tick: u64,

    /// Startup fetch, issued once when the run loop starts.
    pub(crate) startup: Option<StartupTarget>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Navigation events from resolved fetches
mod app_messages;

// Command execution, input handling
mod app_commands;

// Drill-down targets, selection bounds
mod app_navigation;

// Clipboard, browser, theme actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
