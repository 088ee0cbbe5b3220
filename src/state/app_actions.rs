//! Clipboard, browser and theme actions.

use super::App;
use super::platform::clipboard::{ClipboardError, ClipboardManager};
use crate::client::DataService;
use crate::constants::TOAST_TICKS;

impl<S: DataService> App<S> {
    /// Hash of the entity in front: the modal's transaction, else the block.
    pub(crate) fn current_hash(&self) -> Option<&str> {
        let state = self.nav.state();
        if state.is_detail_modal_open() {
            state
                .current_transaction()
                .map(|txn| txn.txn_hash.as_str())
        } else {
            state.current_block().map(|block| block.block_hash.as_str())
        }
    }

    /// Explorer deep link for the entity in front.
    pub(crate) fn explorer_link(&self) -> Option<String> {
        let state = self.nav.state();
        if state.is_detail_modal_open() {
            state
                .current_transaction()
                .map(|txn| self.config.explorer_txn_url(&txn.txn_hash))
        } else {
            state
                .current_block()
                .map(|block| self.config.explorer_block_url(&block.block_hash))
        }
    }

    pub(crate) fn copy_current_hash(&mut self) {
        match self.current_hash().map(str::to_string) {
            Some(hash) => self.copy_to_clipboard(&hash, "Hash"),
            None => self.ui.show_toast("[x] Nothing to copy", TOAST_TICKS),
        }
    }

    pub(crate) fn copy_previous_hash(&mut self) {
        let previous = self
            .nav
            .state()
            .current_block()
            .map(|block| block.previous_block_hash.clone());

        match previous {
            Some(hash) => self.copy_to_clipboard(&hash, "Previous block hash"),
            None => self.ui.show_toast("[x] No block loaded", TOAST_TICKS),
        }
    }

    fn copy_to_clipboard(&mut self, text: &str, label: &str) {
        match ClipboardManager::new().copy_text(text) {
            Ok(()) => self.ui.show_toast(format!("[+] {label} copied!"), TOAST_TICKS),
            Err(ClipboardError::NotAvailable) => {
                self.ui.show_toast("[x] Clipboard not available", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {e}");
                self.ui.show_toast("[x] Failed to copy", TOAST_TICKS);
            }
        }
    }

    pub(crate) fn open_in_explorer(&mut self) {
        match self.explorer_link() {
            Some(url) => match open::that(&url) {
                Ok(()) => {
                    self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
                }
                Err(e) => {
                    tracing::warn!("Failed to open {url}: {e}");
                    self.ui
                        .show_toast(format!("[x] Failed to open browser: {e}"), 30);
                }
            },
            None => {
                self.ui.show_toast("[x] Explorer link unavailable", TOAST_TICKS);
            }
        }
    }

    /// Switches the flow diagram palette for this session.
    pub(crate) fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggle();
        self.ui.show_toast(
            format!("Flow theme: {}", self.config.theme.as_str()),
            TOAST_TICKS,
        );
    }
}
