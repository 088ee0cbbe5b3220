//! Platform-specific abstractions.
//!
//! - [`clipboard`] - Cross-platform clipboard access
//! - [`paths`] - Configuration and log file locations

pub mod clipboard;
pub mod paths;
