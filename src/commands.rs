//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into an [`AppCommand`] by [`KeyMapper`] based on
//! the current [`InputContext`]. The mapping is pure, so keybindings can be
//! tested without a terminal or a running app.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::Select => app.drill_down(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the current block: fields, uncles and transactions.
    BlockView,
    /// The transaction detail modal is open over the block view.
    TransactionModal,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Close the transaction modal.
    Dismiss,

    // === Navigation ===
    /// Cycle focus between the uncle and transaction lists.
    CycleFocus,
    /// Move selection up in the focused list.
    MoveUp,
    /// Move selection down in the focused list.
    MoveDown,
    /// Drill into the selected uncle or transaction.
    Select,
    /// Reopen the last fetched transaction without fetching it again.
    ReopenTransaction,

    // === Actions ===
    /// Copy the hash of the entity on screen.
    CopyHash,
    /// Copy the current block's previous block hash.
    CopyPreviousHash,
    /// Open the entity on screen in the external explorer.
    OpenInExplorer,
    /// Switch between the dark and light flow palettes.
    ToggleTheme,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// Ctrl-C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::BlockView => Self::map_block_view_keys(key),
            InputContext::TransactionModal => Self::map_transaction_modal_keys(key),
        }
    }

    fn map_block_view_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Char('r') => AppCommand::ReopenTransaction,
            KeyCode::Char('c') => AppCommand::CopyHash,
            KeyCode::Char('p') => AppCommand::CopyPreviousHash,
            KeyCode::Char('o') => AppCommand::OpenInExplorer,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            _ => AppCommand::Noop,
        }
    }

    /// The block view stays visible behind the modal but its list keys are inert.
    fn map_transaction_modal_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('c') => AppCommand::CopyHash,
            KeyCode::Char('o') => AppCommand::OpenInExplorer,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
