//! Command execution and input handling for the blockdrill application.
//!
//! Key events are mapped to commands through [`KeyMapper`] and executed
//! against the app state.

use crossterm::event::KeyEvent;

use super::App;
use crate::client::DataService;
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::TOAST_TICKS;

impl<S: DataService> App<S> {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which keybindings are active.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        let state = self.nav.state();
        if state.is_detail_modal_open() && state.current_transaction().is_some() {
            InputContext::TransactionModal
        } else {
            InputContext::BlockView
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Dismiss => {
                self.nav.close_transaction_modal();
            }

            // === Navigation ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::MoveUp => {
                self.ui.move_up();
            }
            AppCommand::MoveDown => {
                let len = self.focused_list_len();
                self.ui.move_down(len);
            }
            AppCommand::Select => {
                self.drill_down();
            }
            AppCommand::ReopenTransaction => {
                if !self.nav.reopen_transaction_modal() {
                    self.ui.show_toast("[x] No transaction to reopen", TOAST_TICKS);
                }
            }

            // === Actions ===
            AppCommand::CopyHash => {
                self.copy_current_hash();
            }
            AppCommand::CopyPreviousHash => {
                self.copy_previous_hash();
            }
            AppCommand::OpenInExplorer => {
                self.open_in_explorer();
            }
            AppCommand::ToggleTheme => {
                self.toggle_theme();
            }

            AppCommand::Noop => {}
        }
    }
}
