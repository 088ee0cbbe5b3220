//! UI state management for the blockdrill TUI.
//!
//! Presentation-only concerns: which list has focus, the selected row in
//! each list, and toast notifications. What is being shown lives in
//! [`super::NavigationState`].

// ============================================================================
// Section
// ============================================================================

/// The block view list that receives keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// The uncle block list.
    Uncles,
    /// The transaction list.
    #[default]
    Transactions,
}

impl Section {
    /// Cycles to the next section.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Uncles => Self::Transactions,
            Self::Transactions => Self::Uncles,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uncles => "Uncles",
            Self::Transactions => "Transactions",
        }
    }
}

// ============================================================================
// UiState
// ============================================================================

/// Container for UI presentation state.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast("Copied!", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    // === Focus ===
    /// Which list currently has focus.
    pub focus: Section,

    // === Selections ===
    /// Selected row in the uncle list.
    pub uncle_index: usize,
    /// Selected row in the transaction list.
    pub txn_index: usize,

    // === Toast Notifications ===
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus & Selection
    // ========================================================================

    /// Cycles focus between the uncle and transaction lists.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    fn selected_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Section::Uncles => &mut self.uncle_index,
            Section::Transactions => &mut self.txn_index,
        }
    }

    /// Moves the selection up, stopping at the first row.
    pub fn move_up(&mut self) {
        let index = self.selected_index_mut();
        *index = index.saturating_sub(1);
    }

    /// Moves the selection down, stopping at the last of `len` rows.
    pub fn move_down(&mut self, len: usize) {
        let index = self.selected_index_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Resets both selections for a newly shown block.
    pub fn reset_selection(&mut self) {
        self.uncle_index = 0;
        self.txn_index = 0;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
