//! Application event loop and shared chrome.
//!
//! The app owns the one [`NavState`], [`TopBar`] and [`NavRail`] instance;
//! screens receive their dependencies at construction and never touch the
//! chrome. Screens only consume keys; anything they leave untouched falls
//! through to the global bindings here.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::Theme;
use crate::catalog::CatalogClient;
use crate::cli::Args;
use crate::command::Command;
use crate::component::{ErrorDialog, ErrorDialogEvent, NavRail, RAIL_WIDTH, TopBar};
use crate::config::{AppConfig, GlobalAction, KeyResolver, NavAction};
use crate::navigation::{NavState, Route};
use crate::screen::{InventreeScreen, KicadScreen, SearchScreen, SettingsScreen};
use crate::tui::{Event, Tui};
use crate::ui::{Chrome, Component, Handled, Screen, ScreenMsg};

/// Completion notifications from spawned commands.
#[derive(Debug)]
enum AppMsg {
    CommandFinished(String),
    CommandFailed { name: String, error: String },
}

pub struct App {
    config: Arc<AppConfig>,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    catalog: Arc<dyn CatalogClient>,

    nav: NavState,
    top_bar: TopBar,
    rail: NavRail,
    screen: Box<dyn Screen>,
    error: Option<ErrorDialog>,

    should_quit: bool,
    msg_tx: UnboundedSender<AppMsg>,
    msg_rx: UnboundedReceiver<AppMsg>,
}

impl App {
    pub fn new(
        config: Arc<AppConfig>,
        resolver: Arc<KeyResolver>,
        theme: Theme,
        catalog: Arc<dyn CatalogClient>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let mut screen = Self::build_screen(Route::Search, &config, &resolver, &catalog);
        screen.init();

        Self {
            top_bar: TopBar::new(Arc::clone(&resolver)),
            rail: NavRail::new(),
            nav: NavState::new(),
            config,
            resolver,
            theme,
            catalog,
            screen,
            error: None,
            should_quit: false,
            msg_tx,
            msg_rx,
        }
    }

    /// Apply startup overrides: a supplier and/or part number prefills the
    /// search screen.
    pub fn apply_cli_args(&mut self, args: &Args) {
        if args.supplier.is_none() && args.part_number.is_none() {
            return;
        }

        let screen = SearchScreen::new(
            Arc::clone(&self.catalog),
            self.config.suppliers.enabled.clone(),
            Arc::clone(&self.resolver),
        )
        .with_query(args.supplier.clone(), args.part_number.clone());

        self.nav.select(Route::Search);
        self.screen = Box::new(screen);
        self.screen.init();
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(60.0, 4.0)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.drain_command_results();
            self.process_screen();
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };

        match event {
            Event::Quit => self.should_quit = true,
            Event::Suspend => {
                tui.suspend()?;
                tui.enter()?;
                tui.clear()?;
            }
            Event::Tick => self.screen.handle_tick(),
            Event::Render => self.render(tui)?,
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                self.render(tui)?;
            }
            Event::Key(key) => self.handle_key_event(key),
            Event::Error(error) => {
                warn!(%error, "terminal event error");
                self.show_error(error);
            }
            Event::Init => {}
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // An open dialog is modal.
        if let Some(dialog) = &mut self.error {
            if let Ok(Handled::Event(ErrorDialogEvent::Dismissed)) = dialog.handle_key(key) {
                self.error = None;
            }
            return;
        }

        if self.screen.handle_key(key) {
            return;
        }

        if self.resolver.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
        } else if self.resolver.matches_global(&key, GlobalAction::Settings) {
            self.navigate(Route::Settings);
        } else if self.resolver.matches_global(&key, GlobalAction::Back) {
            // Settings is the only screen outside the rail to come back from.
            if self.screen.route() == Route::Settings {
                self.navigate(self.nav.selected_route());
            }
        } else if self.resolver.matches_nav(&key, NavAction::NextScreen) {
            self.navigate_rail(1);
        } else if self.resolver.matches_nav(&key, NavAction::PrevScreen) {
            self.navigate_rail(-1);
        }
    }

    /// Move the rail selection by `delta` entries, wrapping around.
    fn navigate_rail(&mut self, delta: isize) {
        let len = self.nav.len() as isize;
        let index = (self.nav.selected_index() as isize + delta).rem_euclid(len) as usize;
        match self.nav.route_at(index) {
            Some(route) => self.navigate(route),
            None => warn!(index, "ignoring out-of-range navigation index"),
        }
    }

    fn navigate(&mut self, route: Route) {
        if self.screen.route() == route {
            return;
        }

        self.nav.select(route);
        self.screen = Self::build_screen(route, &self.config, &self.resolver, &self.catalog);
        self.screen.init();
        info!(?route, "switched screen");
    }

    fn build_screen(
        route: Route,
        config: &Arc<AppConfig>,
        resolver: &Arc<KeyResolver>,
        catalog: &Arc<dyn CatalogClient>,
    ) -> Box<dyn Screen> {
        match route {
            Route::Search => Box::new(SearchScreen::new(
                Arc::clone(catalog),
                config.suppliers.enabled.clone(),
                Arc::clone(resolver),
            )),
            Route::Kicad => Box::new(KicadScreen::new()),
            Route::Inventree => Box::new(InventreeScreen::new()),
            Route::Settings => Box::new(SettingsScreen::new()),
        }
    }

    /// Single funnel for screen side effects.
    fn process_screen(&mut self) {
        match self.screen.update() {
            ScreenMsg::Idle => {}
            ScreenMsg::Commands(commands) => {
                for command in commands {
                    self.spawn_command(command);
                }
            }
            ScreenMsg::Error(message) => self.show_error(message),
        }
    }

    fn spawn_command(&self, command: Box<dyn Command>) {
        let tx = self.msg_tx.clone();
        let name = command.name();
        debug!(%name, "spawning command");
        tokio::spawn(async move {
            match command.execute().await {
                Ok(()) => {
                    let _ = tx.send(AppMsg::CommandFinished(name));
                }
                Err(error) => {
                    let _ = tx.send(AppMsg::CommandFailed {
                        name,
                        error: error.to_string(),
                    });
                }
            }
        });
    }

    fn drain_command_results(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                AppMsg::CommandFinished(name) => debug!(%name, "command finished"),
                AppMsg::CommandFailed { name, error } => {
                    warn!(%name, %error, "command failed");
                    self.show_error(format!("{name} failed: {error}"));
                }
            }
        }
    }

    fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(ErrorDialog::new(message, Arc::clone(&self.resolver)));
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        tui.draw(|frame| self.render_frame(frame))?;
        Ok(())
    }

    fn render_frame(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [bar_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let show_settings_hint = self.screen.route() != Route::Settings;
        self.top_bar.render(
            frame,
            bar_area,
            &self.theme,
            self.screen.title(),
            show_settings_hint,
        );

        match self.screen.chrome() {
            Chrome::Railed => {
                let [rail_area, content] =
                    Layout::horizontal([Constraint::Length(RAIL_WIDTH), Constraint::Min(0)])
                        .areas(body);
                self.rail.render(frame, rail_area, &self.theme, &self.nav);
                self.screen.render_content(frame, content, &self.theme);
            }
            Chrome::BarOnly => self.screen.render_content(frame, body, &self.theme),
        }

        if let Some(dialog) = &mut self.error {
            dialog.render(frame, area, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SupplierRecord;
    use crate::config::keybindings::KeybindingsConfig;
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyModifiers};

    struct NullCatalog;

    #[async_trait]
    impl CatalogClient for NullCatalog {
        async fn search(
            &self,
            _supplier: &str,
            _part_number: &str,
        ) -> color_eyre::Result<Option<SupplierRecord>> {
            Ok(None)
        }
    }

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        App::new(config, resolver, Theme::catppuccin_mocha(), Arc::new(NullCatalog))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn starts_on_the_search_screen() {
        let app = app();
        assert_eq!(app.screen.route(), Route::Search);
        assert_eq!(app.nav.selected_route(), Route::Search);
    }

    #[test]
    fn rail_cycling_wraps_in_both_directions() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Kicad);
        app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Inventree);
        app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Search);

        app.handle_key_event(key(KeyCode::Char('p'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Inventree);
    }

    #[test]
    fn settings_round_trip_preserves_rail_selection() {
        let mut app = app();
        app.navigate(Route::Kicad);

        app.handle_key_event(key(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Settings);
        // The rail still points at the last railed route.
        assert_eq!(app.nav.selected_route(), Route::Kicad);

        app.handle_key_event(key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.screen.route(), Route::Kicad);
    }

    #[test]
    fn screen_errors_open_the_modal_dialog() {
        let mut app = app();
        app.show_error("Search failed: backend unreachable");
        assert!(app.error.is_some());

        // Keys go to the dialog while it is open; dismiss closes it.
        app.handle_key_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.screen.route(), Route::Search);
        app.handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.error.is_none());
    }

    #[test]
    fn quit_key_falls_through_on_placeholder_screens() {
        let mut app = app();
        app.navigate(Route::Kicad);
        app.handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
