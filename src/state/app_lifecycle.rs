//! Application lifecycle management.
//!
//! - `new()` / `with_service()` - create the application
//! - `start()` - issue the startup fetch
//! - `run()` - main event loop

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::client::{DataService, ExplorerClient};
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, NavigationController, StartupTarget, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App<ExplorerClient> {
    /// Creates an app talking to the HTTP data service named in `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: AppConfig, startup: StartupTarget) -> Result<Self> {
        let client = ExplorerClient::new(config.api_url.clone(), config.http_config())?;
        Ok(Self::with_service(client, config, startup))
    }
}

impl<S: DataService> App<S> {
    /// Creates an app over an arbitrary data service.
    #[must_use]
    pub fn with_service(service: S, config: AppConfig, startup: StartupTarget) -> Self {
        Self {
            nav: NavigationController::new(Arc::new(service), config.navigation_config()),
            ui: UiState::new(),
            config,
            exit: false,
            animation_tick: 0,
            startup: Some(startup),
        }
    }

    /// Issues the startup fetch. Later calls do nothing.
    pub fn start(&mut self) {
        match self.startup.take() {
            Some(StartupTarget::Block(block_id)) => {
                tracing::info!("Starting at block {block_id}");
                self.nav.load_block(&block_id);
            }
            Some(StartupTarget::Transaction(txn_id)) => {
                tracing::info!("Starting at transaction {txn_id}");
                self.nav.open_transaction(&txn_id);
            }
            None => {}
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start();

        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_nav_events();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        self.nav.teardown();
        Ok(())
    }

    /// Advances animations and toast countdowns by one tick.
    pub(crate) fn tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.ui.tick_toast();
    }
}
