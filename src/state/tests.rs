//! Tests for the state module.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rstest::rstest;

use super::navigation::{NavigationConfig, NavigationState};
use super::{App, AppConfig, NavEvent, NavigationController, Section, StartupTarget};
use crate::commands::{AppCommand, InputContext};
use crate::domain::{EntityKind, FetchFailed};
use crate::test_utils::{
    BlockMother, MockService, Reply, TransactionMother, mock_app, mock_service,
};
use crate::theme::FlowTheme;

// ========================================================================
// Test Helper Functions
// ========================================================================

fn controller(
    service: MockService,
    config: NavigationConfig,
) -> (Arc<MockService>, NavigationController<MockService>) {
    let service = service.into_arc();
    let nav = NavigationController::new(Arc::clone(&service), config);
    (service, nav)
}

fn superseding() -> NavigationConfig {
    NavigationConfig {
        cancel_superseded: true,
        ..NavigationConfig::default()
    }
}

fn block_shown(hash: &str) -> NavEvent {
    NavEvent::BlockShown {
        block_hash: hash.to_string(),
    }
}

fn txn_shown(hash: &str) -> NavEvent {
    NavEvent::TransactionShown {
        txn_hash: hash.to_string(),
    }
}

fn shown_block_hash(nav: &NavigationController<MockService>) -> Option<&str> {
    nav.state()
        .current_block()
        .map(|block| block.block_hash.as_str())
}

fn press(app: &mut App<MockService>, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Waits for every fetch and feeds the results through the app.
async fn settle_app(app: &mut App<MockService>) {
    for event in app.nav.settle().await {
        app.handle_nav_event(event);
    }
}

// ========================================================================
// Navigation State Tests
// ========================================================================

#[test]
fn test_navigation_state_starts_empty() {
    let state = NavigationState::default();

    assert!(state.current_block().is_none());
    assert!(state.current_transaction().is_none());
    assert!(!state.is_loading());
    assert!(!state.is_detail_modal_open());
}

#[rstest]
fn test_new_controller_is_idle(mock_service: MockService) {
    let (_, nav) = controller(mock_service, NavigationConfig::default());

    assert_eq!(nav.state(), &NavigationState::default());
    assert_eq!(nav.pending(), 0);
}

// ========================================================================
// Block Loading Tests
// ========================================================================

#[rstest]
#[tokio::test]
async fn test_load_block_success(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());

    nav.load_block("0xb1");
    assert!(nav.state().is_loading());
    assert!(nav.state().current_block().is_none());

    let events = nav.settle().await;

    assert_eq!(events, vec![block_shown("0xb1")]);
    assert_eq!(nav.state().current_block(), Some(&BlockMother::full("0xb1")));
    assert!(!nav.state().is_loading());
    assert_eq!(nav.pending(), 0);
}

#[rstest]
#[tokio::test]
async fn test_open_uncle_replaces_block(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.load_block("0xb1");
    nav.settle().await;

    nav.open_uncle("0xu1");
    let events = nav.settle().await;

    assert_eq!(events, vec![block_shown("0xu1")]);
    assert_eq!(shown_block_hash(&nav), Some("0xu1"));
}

#[rstest]
#[tokio::test]
async fn test_failed_uncle_keeps_previous_block(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.load_block("0xb1");
    nav.settle().await;
    let before = nav.state().clone();

    nav.open_uncle("bad");
    let events = nav.settle().await;

    assert_eq!(
        events,
        vec![NavEvent::Failed(FetchFailed {
            kind: EntityKind::Block,
            id: "bad".to_string(),
            reason: "block 'bad' not found".to_string(),
        })]
    );
    assert_eq!(nav.state(), &before);
    assert!(!nav.state().is_loading());
}

#[tokio::test]
async fn test_malformed_payload_is_a_fetch_failure() {
    let service = MockService::new().with_block_reply("0xb1", Reply::Malformed, Duration::ZERO);
    let (_, mut nav) = controller(service, NavigationConfig::default());

    nav.load_block("0xb1");
    let events = nav.settle().await;

    assert!(matches!(
        events.as_slice(),
        [NavEvent::Failed(failed)] if failed.reason == "Parse error: unexpected block payload"
    ));
    assert!(nav.state().current_block().is_none());
    assert!(!nav.state().is_loading());
}

// ========================================================================
// Transaction Modal Tests
// ========================================================================

#[rstest]
#[tokio::test]
async fn test_open_transaction_opens_modal(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());

    nav.open_transaction("0xt1");
    assert!(nav.state().is_loading());
    assert!(!nav.state().is_detail_modal_open());

    let events = nav.settle().await;

    assert_eq!(events, vec![txn_shown("0xt1")]);
    assert!(nav.state().is_detail_modal_open());
    assert_eq!(
        nav.state().current_transaction(),
        Some(&TransactionMother::transfer("0xt1"))
    );
    assert!(!nav.state().is_loading());
}

#[rstest]
#[tokio::test]
async fn test_open_transaction_never_touches_block(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.load_block("0xb1");
    nav.settle().await;
    let block = nav.state().current_block().cloned();

    nav.open_transaction("0xt1");
    assert_eq!(nav.state().current_block().cloned(), block);

    nav.settle().await;
    assert_eq!(nav.state().current_block().cloned(), block);
}

#[rstest]
#[tokio::test]
async fn test_failed_transaction_keeps_modal_as_it_was(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.open_transaction("0xt1");
    nav.settle().await;

    nav.open_transaction("missing");
    let events = nav.settle().await;

    assert!(matches!(
        events.as_slice(),
        [NavEvent::Failed(failed)] if failed.kind == EntityKind::Transaction
    ));
    assert!(nav.state().is_detail_modal_open());
    assert_eq!(
        nav.state()
            .current_transaction()
            .map(|txn| txn.txn_hash.as_str()),
        Some("0xt1")
    );
}

#[rstest]
#[tokio::test]
async fn test_close_keeps_transaction_and_reopen_skips_fetch(mock_service: MockService) {
    let (service, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.open_transaction("0xt1");
    nav.settle().await;

    nav.close_transaction_modal();
    assert!(!nav.state().is_detail_modal_open());
    assert!(nav.state().current_transaction().is_some());

    assert!(nav.reopen_transaction_modal());
    assert!(nav.state().is_detail_modal_open());
    assert!(!nav.state().is_loading());
    assert_eq!(nav.pending(), 0);
    assert_eq!(service.calls(), vec!["0xt1".to_string()]);
}

#[rstest]
fn test_reopen_without_transaction_does_nothing(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());

    assert!(!nav.reopen_transaction_modal());
    assert!(!nav.state().is_detail_modal_open());
}

#[rstest]
#[tokio::test]
async fn test_open_transaction_always_refetches(mock_service: MockService) {
    let (service, mut nav) = controller(mock_service, NavigationConfig::default());

    nav.open_transaction("0xt1");
    nav.settle().await;
    nav.open_transaction("0xt1");
    nav.settle().await;

    assert_eq!(service.calls(), vec!["0xt1".to_string(), "0xt1".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_open_uncle_closes_modal_immediately(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());
    nav.load_block("0xb1");
    nav.open_transaction("0xt1");
    nav.settle().await;
    assert!(nav.state().is_detail_modal_open());

    nav.open_uncle("bad");
    assert!(!nav.state().is_detail_modal_open());

    nav.settle().await;
    assert!(!nav.state().is_detail_modal_open());
    assert_eq!(shown_block_hash(&nav), Some("0xb1"));
    assert!(nav.state().current_transaction().is_some());
}

// ========================================================================
// Overlapping Fetch Tests
// ========================================================================

fn racing_blocks() -> MockService {
    MockService::new()
        .with_block_after(BlockMother::basic("slow"), Duration::from_millis(200))
        .with_block_after(BlockMother::basic("fast"), Duration::from_millis(10))
}

#[tokio::test(start_paused = true)]
async fn test_last_resolution_wins_by_default() {
    let (_, mut nav) = controller(racing_blocks(), NavigationConfig::default());

    nav.open_uncle("slow");
    nav.open_uncle("fast");
    assert_eq!(nav.pending(), 2);

    let events = nav.settle().await;

    assert_eq!(events, vec![block_shown("fast"), block_shown("slow")]);
    assert_eq!(shown_block_hash(&nav), Some("slow"));
    assert!(!nav.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_loading_stays_set_until_last_fetch_resolves() {
    let (_, mut nav) = controller(racing_blocks(), NavigationConfig::default());
    nav.open_uncle("slow");
    nav.open_uncle("fast");

    tokio::time::sleep(Duration::from_millis(50)).await;
    let events = nav.poll_completed();

    assert_eq!(events, vec![block_shown("fast")]);
    assert_eq!(shown_block_hash(&nav), Some("fast"));
    assert!(nav.state().is_loading());
    assert_eq!(nav.pending(), 1);

    nav.settle().await;
    assert!(!nav.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_superseded_keeps_most_recent_request() {
    let (_, mut nav) = controller(racing_blocks(), superseding());

    nav.open_uncle("fast");
    nav.open_uncle("slow");
    assert_eq!(nav.pending(), 2);

    let events = nav.settle().await;

    assert_eq!(events, vec![block_shown("slow")]);
    assert_eq!(shown_block_hash(&nav), Some("slow"));
    assert!(!nav.state().is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_superseded_only_aborts_same_kind() {
    let service = racing_blocks().with_transaction_after(
        TransactionMother::transfer("0xt1"),
        Duration::from_millis(100),
    );
    let (_, mut nav) = controller(service, superseding());

    nav.open_transaction("0xt1");
    nav.open_uncle("fast");
    let events = nav.settle().await;

    assert_eq!(events, vec![block_shown("fast"), txn_shown("0xt1")]);
}

#[rstest]
#[tokio::test]
async fn test_poll_completed_without_fetches_is_empty(mock_service: MockService) {
    let (_, mut nav) = controller(mock_service, NavigationConfig::default());

    assert!(nav.poll_completed().is_empty());
    assert!(nav.settle().await.is_empty());
}

// ========================================================================
// Timeout, Panic & Cancellation Tests
// ========================================================================

#[tokio::test(start_paused = true)]
async fn test_hanging_fetch_times_out() {
    let service = MockService::new().with_block_reply("stuck", Reply::Hang, Duration::ZERO);
    let config = NavigationConfig {
        fetch_timeout: Duration::from_secs(5),
        ..NavigationConfig::default()
    };
    let (_, mut nav) = controller(service, config);

    nav.load_block("stuck");
    let events = nav.settle().await;

    assert_eq!(
        events,
        vec![NavEvent::Failed(FetchFailed {
            kind: EntityKind::Block,
            id: "stuck".to_string(),
            reason: "Request timed out after 5s".to_string(),
        })]
    );
    assert!(!nav.state().is_loading());
}

#[tokio::test]
async fn test_panicking_fetch_is_reported_as_failure() {
    let service =
        MockService::new().with_transaction_reply("0xboom", Reply::Panic, Duration::ZERO);
    let (_, mut nav) = controller(service, NavigationConfig::default());

    nav.open_transaction("0xboom");
    let events = nav.settle().await;

    assert_eq!(
        events,
        vec![NavEvent::Failed(FetchFailed {
            kind: EntityKind::Transaction,
            id: "0xboom".to_string(),
            reason: "fetch task panicked".to_string(),
        })]
    );
    assert!(!nav.state().is_loading());
    assert!(!nav.state().is_detail_modal_open());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_drops_fetch_silently() {
    let service = MockService::new().with_block_reply("stuck", Reply::Hang, Duration::ZERO);
    let (_, mut nav) = controller(service, NavigationConfig::default());

    let task_id = nav.load_block("stuck");
    assert!(nav.cancel(task_id));

    assert!(nav.settle().await.is_empty());
    assert!(!nav.state().is_loading());
    assert!(!nav.cancel(task_id));
}

#[tokio::test(start_paused = true)]
async fn test_teardown_aborts_and_resets() {
    let service = MockService::new()
        .with_block(BlockMother::basic("0xb1"))
        .with_transaction_reply("stuck", Reply::Hang, Duration::ZERO);
    let (_, mut nav) = controller(service, NavigationConfig::default());
    nav.load_block("0xb1");
    nav.settle().await;
    nav.open_transaction("stuck");

    nav.teardown();

    assert_eq!(nav.state(), &NavigationState::default());
    assert_eq!(nav.pending(), 0);
    assert!(nav.poll_completed().is_empty());
    assert!(nav.settle().await.is_empty());
}

// ========================================================================
// App Startup Tests
// ========================================================================

#[rstest]
#[tokio::test]
async fn test_start_loads_startup_block(mut mock_app: App<MockService>) {
    mock_app.start();
    assert!(mock_app.nav.state().is_loading());

    settle_app(&mut mock_app).await;

    assert_eq!(shown_block_hash(&mock_app.nav), Some("0xb1"));
    assert_eq!(mock_app.get_input_context(), InputContext::BlockView);

    mock_app.start();
    assert_eq!(mock_app.nav.pending(), 0);
}

#[rstest]
#[tokio::test]
async fn test_start_on_transaction_has_no_block(mock_service: MockService) {
    let mut app = App::with_service(
        mock_service,
        AppConfig::default(),
        StartupTarget::Transaction("0xt1".to_string()),
    );

    app.start();
    settle_app(&mut app).await;

    assert!(app.nav.state().current_block().is_none());
    assert!(app.nav.state().is_detail_modal_open());
    assert_eq!(app.get_input_context(), InputContext::TransactionModal);
}

#[rstest]
#[tokio::test]
async fn test_failed_startup_shows_error_toast(mock_service: MockService) {
    let mut app = App::with_service(
        mock_service,
        AppConfig::default(),
        StartupTarget::Block("missing".to_string()),
    );

    app.start();
    settle_app(&mut app).await;

    assert_eq!(
        app.ui.toast_message(),
        Some("[x] Failed to load block 'missing': block 'missing' not found")
    );
    assert!(!app.nav.state().is_loading());
}

// ========================================================================
// App Drill-Down Tests
// ========================================================================

#[rstest]
#[tokio::test]
async fn test_enter_opens_selected_transaction(mut mock_app: App<MockService>) {
    mock_app.start();
    settle_app(&mut mock_app).await;

    press(&mut mock_app, KeyCode::Down);
    press(&mut mock_app, KeyCode::Enter);
    settle_app(&mut mock_app).await;

    assert_eq!(mock_app.get_input_context(), InputContext::TransactionModal);
    assert_eq!(
        mock_app
            .nav
            .state()
            .current_transaction()
            .map(|txn| txn.txn_hash.as_str()),
        Some("0xt2")
    );
}

#[rstest]
#[tokio::test]
async fn test_esc_dismisses_and_r_reopens(mut mock_app: App<MockService>) {
    mock_app.start();
    settle_app(&mut mock_app).await;
    mock_app.execute_command(AppCommand::Select);
    settle_app(&mut mock_app).await;

    press(&mut mock_app, KeyCode::Esc);
    assert_eq!(mock_app.get_input_context(), InputContext::BlockView);
    assert!(mock_app.nav.state().current_transaction().is_some());

    press(&mut mock_app, KeyCode::Char('r'));
    assert_eq!(mock_app.get_input_context(), InputContext::TransactionModal);
    assert_eq!(mock_app.nav.pending(), 0);
}

#[rstest]
#[tokio::test]
async fn test_enter_on_uncle_replaces_block_and_resets_selection(
    mut mock_app: App<MockService>,
) {
    mock_app.start();
    settle_app(&mut mock_app).await;
    mock_app.execute_command(AppCommand::MoveDown);
    assert_eq!(mock_app.ui.txn_index, 1);

    press(&mut mock_app, KeyCode::Tab);
    assert_eq!(mock_app.ui.focus, Section::Uncles);
    press(&mut mock_app, KeyCode::Enter);
    settle_app(&mut mock_app).await;

    assert_eq!(shown_block_hash(&mock_app.nav), Some("0xu1"));
    assert_eq!(mock_app.ui.txn_index, 0);
    assert_eq!(mock_app.ui.uncle_index, 0);
}

#[rstest]
fn test_select_without_block_does_nothing(mut mock_app: App<MockService>) {
    assert!(mock_app.drill_target().is_none());

    mock_app.execute_command(AppCommand::Select);

    assert_eq!(mock_app.nav.pending(), 0);
}

#[rstest]
#[tokio::test]
async fn test_move_down_stops_at_last_row(mut mock_app: App<MockService>) {
    mock_app.start();
    settle_app(&mut mock_app).await;

    for _ in 0..5 {
        mock_app.execute_command(AppCommand::MoveDown);
    }
    assert_eq!(mock_app.ui.txn_index, 1);

    mock_app.execute_command(AppCommand::CycleFocus);
    for _ in 0..5 {
        mock_app.execute_command(AppCommand::MoveDown);
    }
    assert_eq!(mock_app.ui.uncle_index, 1);

    mock_app.execute_command(AppCommand::MoveUp);
    assert_eq!(mock_app.ui.uncle_index, 0);
}

#[rstest]
fn test_reopen_without_transaction_shows_toast(mut mock_app: App<MockService>) {
    press(&mut mock_app, KeyCode::Char('r'));

    assert_eq!(
        mock_app.ui.toast_message(),
        Some("[x] No transaction to reopen")
    );
    assert!(!mock_app.nav.state().is_detail_modal_open());
}

// ========================================================================
// App Action Tests
// ========================================================================

#[rstest]
#[tokio::test]
async fn test_current_hash_follows_front_entity(mut mock_app: App<MockService>) {
    assert!(mock_app.current_hash().is_none());
    assert!(mock_app.explorer_link().is_none());

    mock_app.start();
    settle_app(&mut mock_app).await;
    assert_eq!(mock_app.current_hash(), Some("0xb1"));
    assert_eq!(
        mock_app.explorer_link().as_deref(),
        Some("https://etherscan.io/block/0xb1")
    );

    mock_app.execute_command(AppCommand::Select);
    settle_app(&mut mock_app).await;
    assert_eq!(mock_app.current_hash(), Some("0xt1"));
    assert_eq!(
        mock_app.explorer_link().as_deref(),
        Some("https://etherscan.io/tx/0xt1")
    );
}

#[rstest]
fn test_nothing_to_copy_shows_toast(mut mock_app: App<MockService>) {
    mock_app.execute_command(AppCommand::CopyHash);
    assert_eq!(mock_app.ui.toast_message(), Some("[x] Nothing to copy"));

    mock_app.execute_command(AppCommand::CopyPreviousHash);
    assert_eq!(mock_app.ui.toast_message(), Some("[x] No block loaded"));
}

#[rstest]
fn test_toggle_theme_flips_palette(mut mock_app: App<MockService>) {
    assert_eq!(mock_app.config.theme, FlowTheme::Dark);

    press(&mut mock_app, KeyCode::Char('t'));
    assert_eq!(mock_app.config.theme, FlowTheme::Light);
    assert_eq!(mock_app.ui.toast_message(), Some("Flow theme: light"));

    press(&mut mock_app, KeyCode::Char('t'));
    assert_eq!(mock_app.config.theme, FlowTheme::Dark);
}

#[rstest]
fn test_quit_and_ctrl_c_exit(mut mock_app: App<MockService>) {
    press(&mut mock_app, KeyCode::Esc);
    assert!(!mock_app.exit);

    press(&mut mock_app, KeyCode::Char('q'));
    assert!(mock_app.exit);

    mock_app.exit = false;
    mock_app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(mock_app.exit);
}

#[rstest]
fn test_tick_expires_toast(mut mock_app: App<MockService>) {
    mock_app.ui.show_toast("hello", 3);

    mock_app.tick();
    mock_app.tick();
    assert!(mock_app.ui.toast_message().is_some());

    mock_app.tick();
    assert!(mock_app.ui.toast_message().is_none());
    assert_eq!(mock_app.animation_tick, 3);
}
