//! App — event loop, key dispatch, and rendering.
//!
//! Architecture:
//! - `App` owns the hit pages, the focus controller, and the widgets.
//! - A `tokio::mpsc` channel carries terminal events in from a blocking
//!   reader task; the loop draws a frame, then awaits the next event.
//! - Every navigation key goes through the controller first; its returned
//!   effects are mirrored into the view, and only unconsumed keys reach the
//!   mode-specific default handling below.
//! - Changing the query replaces the page and the controller wholesale, the
//!   way a fresh results page would.

use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use hitlist_core::config::Config;
use hitlist_core::focus::{Disposition, FocusController, NavKey};
use hitlist_core::page::HitPage;

use crate::keys::{self, ShiftSync, ShiftTransition};
use crate::widgets::hit_list::HitListView;
use crate::widgets::pane_chrome::pane_chrome;
use crate::widgets::search_bar::{SearchAction, SearchBar};
use crate::widgets::status_bar::{self, InputMode};
use crate::widgets::toast::ToastManager;

pub struct App {
    config: Config,
    /// Every hit the loader produced.
    full: HitPage,
    /// The page currently on screen (narrowed by the query).
    page: HitPage,
    controller: FocusController,
    search: SearchBar,
    view: HitListView,
    toast: ToastManager,
    mode: InputMode,
    shift_sync: ShiftSync,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, full: HitPage) -> Self {
        let page = full.clone();
        let controller = FocusController::new(config.results.class.clone());
        Self {
            config,
            full,
            page,
            controller,
            search: SearchBar::default(),
            view: HitListView::new(),
            toast: ToastManager::new(),
            mode: InputMode::Normal,
            shift_sync: ShiftSync::default(),
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        debug!("run(): enabling raw mode");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        debug!("run(): terminal created, size={:?}", terminal.size());

        let (tx, mut rx) = mpsc::channel::<Event>(256);

        // ── Background task: keyboard events ──────────────────────────────────
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(ev).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // Toast expiry check
        let mut ui_tick = tokio::time::interval(Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // Initial focus: the first link on the page, if there is one.
        let effects = self.controller.init(&self.page);
        self.apply_effects(effects);
        info!("ready: {} hits, {} navigable", self.page.len(), self.controller.link_count());

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(ev) = rx.recv() => {
                    needs_redraw = self.handle_event(ev);
                }
                _ = ui_tick.tick() => {
                    if !self.toast.is_empty() {
                        self.toast.tick();
                        needs_redraw = true;
                    }
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_event(&mut self, ev: Event) -> bool {
        match ev {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Shift tracking runs on every event, releases included, so the
        // controller's flag follows the modifier bits as closely as a
        // terminal allows.
        match self.shift_sync.observe(&key) {
            Some(ShiftTransition::Pressed) => {
                let out = self
                    .controller
                    .key_down(NavKey::Shift, &self.page, self.searching());
                self.apply_effects(out.effects);
            }
            Some(ShiftTransition::Released) => self.controller.key_up(NavKey::Shift),
            None => {}
        }

        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Global: Ctrl-C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Document-level navigation: the controller sees the key first; the
        // search gate decides inside whether it acts.
        if let Some(nav) = keys::nav_key_for(&key) {
            let out = self.controller.key_down(nav, &self.page, self.searching());
            let consumed = out.disposition == Disposition::Consumed;
            self.apply_effects(out.effects);
            if consumed {
                return true;
            }
        }

        if self.searching() {
            self.handle_search_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match self.search.handle_key(key) {
            SearchAction::Changed(query) => {
                // Live preview: narrow the page while typing. No controller
                // yet; it is rebuilt when the query settles.
                self.page = self.full.filtered(&query);
                self.view.reset();
                true
            }
            SearchAction::Confirmed | SearchAction::Cancelled => {
                self.mode = InputMode::Normal;
                self.rebuild_page();
                true
            }
            SearchAction::None => false,
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('/') => {
                self.open_search();
                true
            }
            KeyCode::Enter => self.open_focused(),
            KeyCode::Char('y') => self.copy_focused(),
            // Defaults for keys the controller passed through: horizontal
            // scrolling of long rows. Right only gets here away from the
            // last link.
            KeyCode::Right => {
                self.view.scroll_right(self.config.ui.hscroll_step);
                true
            }
            KeyCode::Left => {
                self.view.scroll_left(self.config.ui.hscroll_step);
                true
            }
            _ => false,
        }
    }

    // ── Search / page lifecycle ───────────────────────────────────────────────

    fn searching(&self) -> bool {
        self.search.is_active()
    }

    fn open_search(&mut self) {
        // The search field takes focus, so the focused link blurs first.
        let effects = self.controller.blur();
        self.apply_effects(effects);
        self.search.activate();
        self.mode = InputMode::Search;
    }

    /// Settle the current query into a fresh page + controller, as when a
    /// new results page loads.
    fn rebuild_page(&mut self) {
        self.page = self.full.filtered(self.search.text());
        self.view.reset();
        self.shift_sync.reset();
        self.controller = FocusController::new(self.config.results.class.clone());
        let effects = self.controller.init(&self.page);
        self.apply_effects(effects);
        debug!(
            "page rebuilt: query={:?}, {} hits, {} navigable",
            self.search.text(),
            self.page.len(),
            self.controller.link_count()
        );
    }

    fn apply_effects(&mut self, effects: Vec<hitlist_core::focus::Effect>) {
        for effect in effects {
            self.view.apply(effect, &self.page);
        }
    }

    // ── Link activation ───────────────────────────────────────────────────────

    fn focused_url(&self) -> Option<&str> {
        if !self.controller.is_link_focused() {
            return None;
        }
        self.controller
            .focused_link()
            .map(|link| self.page.link(link).url.as_str())
    }

    fn open_focused(&mut self) -> bool {
        let Some(url) = self.focused_url().map(str::to_string) else {
            return false;
        };
        match open::that(&url) {
            Ok(()) => self.toast.info(format!("opening {}", truncate(&url, 40))),
            Err(e) => {
                warn!("failed to open {}: {}", url, e);
                self.toast.error(format!("open failed: {}", e));
            }
        }
        true
    }

    fn copy_focused(&mut self) -> bool {
        let Some(url) = self.focused_url().map(str::to_string) else {
            return false;
        };
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(url.clone())) {
            Ok(()) => self.toast.success(format!("copied: {}", truncate(&url, 40))),
            Err(e) => {
                warn!("clipboard error: {}", e);
                self.toast.error(format!("copy failed: {}", e));
            }
        }
        true
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let [search_area, results_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let search_block = pane_chrome("search", self.searching(), None);
        let search_inner = search_block.inner(search_area);
        frame.render_widget(search_block, search_area);
        self.search.draw(frame, search_inner);

        self.view.draw(
            frame,
            results_area,
            &self.page,
            self.full.len(),
            &self.config.results.class,
            !self.searching(),
            &self.config.ui,
        );

        status_bar::draw_status_bar(
            frame,
            status_area,
            self.mode,
            self.page.len(),
            self.full.len(),
            self.focused_url(),
        );

        self.toast.draw(frame, frame.area());
    }
}

/// Shorten long URLs for toast display.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}…", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}
