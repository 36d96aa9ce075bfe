//! SearchBar — wraps tui-input for the query field above the results.
//!
//! The input's own editing (cursor movement, deletion, history of
//! keystrokes) is entirely tui-input's business; this wrapper only decides
//! when the field opens and closes and reports what happened.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{style_muted, style_search, C_SECONDARY};

pub enum SearchAction {
    Changed(String),
    Confirmed,
    Cancelled,
    None,
}

pub struct SearchBar {
    input: Input,
    active: bool,
    placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn text(&self) -> &str {
        self.input.value()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle a key event. Returns what happened.
    ///
    /// Esc behaviour:
    ///   - If the input has text: clear the text, emit `Changed("")`
    ///     (keeps the field open but empty)
    ///   - If the input is already empty: deactivate and emit `Cancelled`
    pub fn handle_key(&mut self, key: KeyEvent) -> SearchAction {
        match key.code {
            KeyCode::Esc => {
                if !self.input.value().is_empty() {
                    self.input = Input::default();
                    SearchAction::Changed(String::new())
                } else {
                    self.deactivate();
                    SearchAction::Cancelled
                }
            }
            KeyCode::Enter => {
                self.deactivate();
                SearchAction::Confirmed
            }
            _ => {
                let before = self.input.value().to_string();
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                if self.input.value() == before {
                    SearchAction::None
                } else {
                    SearchAction::Changed(self.input.value().to_string())
                }
            }
        }
    }

    /// Render the query line into `area` (the inside of the search pane).
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(4) as usize);
        let value = self.input.value();
        let display = if value.is_empty() && !self.active {
            Span::styled(format!(" {}", self.placeholder), style_muted())
        } else if self.active {
            Span::styled(format!(" {}", &value[scroll..]), style_search())
        } else {
            Span::styled(format!(" {}", value), Style::default().fg(C_SECONDARY))
        };

        frame.render_widget(Paragraph::new(Line::from(vec![display])), area);

        // Show cursor while the field holds focus
        if self.active {
            let cursor_x = area.x + 1 + (self.input.visual_cursor().saturating_sub(scroll)) as u16;
            frame.set_cursor_position((
                cursor_x.min(area.x + area.width.saturating_sub(1)),
                area.y,
            ));
        }
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new("press / to search…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn press(bar: &mut SearchBar, code: KeyCode) -> SearchAction {
        bar.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_reports_changes() {
        let mut bar = SearchBar::default();
        bar.activate();
        match press(&mut bar, KeyCode::Char('r')) {
            SearchAction::Changed(q) => assert_eq!(q, "r"),
            _ => panic!("expected Changed"),
        }
        assert_eq!(bar.text(), "r");
    }

    #[test]
    fn enter_confirms_and_deactivates() {
        let mut bar = SearchBar::default();
        bar.activate();
        press(&mut bar, KeyCode::Char('x'));
        assert!(matches!(press(&mut bar, KeyCode::Enter), SearchAction::Confirmed));
        assert!(!bar.is_active());
        assert_eq!(bar.text(), "x");
    }

    #[test]
    fn esc_clears_then_cancels() {
        let mut bar = SearchBar::default();
        bar.activate();
        press(&mut bar, KeyCode::Char('x'));
        match press(&mut bar, KeyCode::Esc) {
            SearchAction::Changed(q) => assert_eq!(q, ""),
            _ => panic!("first Esc should clear"),
        }
        assert!(bar.is_active());
        assert!(matches!(press(&mut bar, KeyCode::Esc), SearchAction::Cancelled));
        assert!(!bar.is_active());
    }

    #[test]
    fn unhandled_keys_report_none() {
        let mut bar = SearchBar::default();
        bar.activate();
        assert!(matches!(press(&mut bar, KeyCode::Tab), SearchAction::None));
    }
}
