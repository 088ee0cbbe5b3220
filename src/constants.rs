//! Application constants for the blockdrill TUI.
//!
//! Centralizes timing, layout and default endpoint values used across the
//! state and UI layers.

use std::time::Duration;

// ============================================================================
// Timing Constants
// ============================================================================

/// Main loop tick; toasts and the loading spinner advance once per tick.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default bound on a single drill-down fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default bound on a single drill-down fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS);

/// Ticks an informational toast stays visible (~2s).
pub const TOAST_TICKS: u8 = 20;

/// Ticks a fetch failure toast stays visible (~4s).
pub const ERROR_TOAST_TICKS: u8 = 40;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the key hint footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the block fields table, borders included.
pub const BLOCK_FIELDS_HEIGHT: u16 = 12;

/// Transaction modal size as a percentage of the terminal.
pub const MODAL_WIDTH_PERCENT: u16 = 80;
pub const MODAL_HEIGHT_PERCENT: u16 = 80;

/// Hash length shown in list rows before truncation.
pub const HASH_DISPLAY_LENGTH: usize = 42;

// ============================================================================
// Endpoint Defaults
// ============================================================================

/// Data service root used when no config or flag overrides it.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// External explorer used for deep links.
pub const DEFAULT_EXPLORER_URL: &str = "https://etherscan.io";

/// Animation frames for the loading indicator.
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for a given animation tick.
#[must_use]
pub const fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}
