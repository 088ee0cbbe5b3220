//! Applying resolved fetches to the app.

use super::{App, NavEvent};
use crate::client::DataService;
use crate::constants::ERROR_TOAST_TICKS;

impl<S: DataService> App<S> {
    /// Drains resolved fetches from the navigation controller.
    pub(crate) fn process_nav_events(&mut self) {
        for event in self.nav.poll_completed() {
            self.handle_nav_event(event);
        }
    }

    pub(crate) fn handle_nav_event(&mut self, event: NavEvent) {
        match event {
            NavEvent::BlockShown { block_hash } => {
                tracing::info!("Showing block {block_hash}");
                self.ui.reset_selection();
            }
            NavEvent::TransactionShown { txn_hash } => {
                tracing::info!("Showing transaction {txn_hash}");
            }
            NavEvent::Failed(failed) => {
                self.ui
                    .show_toast(format!("[x] {failed}"), ERROR_TOAST_TICKS);
            }
        }
    }
}
