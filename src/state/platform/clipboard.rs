//! Cross-platform clipboard access.
//!
//! On Linux, external tools are tried first (`wl-copy`, then `xclip`, then
//! `xsel`) because they keep the copied text alive after the TUI exits.
//! Everywhere else, and as the Linux fallback, the `arboard` crate is used.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Manager
// ============================================================================

#[derive(Debug)]
pub struct ClipboardManager {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Copies text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard backend accepted the text.
    pub fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::copy_with_external_tool(text).is_ok() {
            return Ok(());
        }

        Self::copy_with_arboard(text)
    }

    fn copy_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        if TOOLS
            .iter()
            .any(|(tool, args)| Self::try_tool(tool, args, text))
        {
            Ok(())
        } else {
            Err(ClipboardError::NotAvailable)
        }
    }

    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let Ok(mut child) = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

// ============================================================================
// Tests
// ============================================================================
