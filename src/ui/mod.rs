//! UI rendering module for the blockdrill TUI.
//!
//! # Module Structure
//!
//! - `panels` - The block view (fields, uncles, sidecars, transactions)
//! - `popups` - The transaction modal
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations and structs
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::client::DataService;
use crate::state::App;

use layout::calculate_app_layout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws one frame: chrome, block view, the modal when open, then the toast.
pub fn render<S: DataService>(app: &App<S>, frame: &mut Frame) {
    let size = frame.area();
    let layout = calculate_app_layout(size);

    header::render(frame, layout.header, app);
    panels::block::render(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    if app.nav.state().is_detail_modal_open() {
        popups::transaction::render(app, frame, size);
    }

    if let Some(message) = app.ui.toast_message() {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
