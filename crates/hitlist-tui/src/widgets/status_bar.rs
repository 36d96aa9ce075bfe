//! Status bar — bottom line with input mode, hit count, and keybindings.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{C_MODE_NORMAL, C_MODE_SEARCH, C_MUTED, C_SECONDARY, C_URL};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Search,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Search => C_MODE_SEARCH,
        }
    }
}

/// Draw the status line: mode, shown/total count, the focused link's
/// destination, and the key hints for the current mode.
pub fn draw_status_bar(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    shown: usize,
    total: usize,
    focused_url: Option<&str>,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default().fg(mode.color()).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}/{} hits ", shown, total), Style::default().fg(C_SECONDARY)),
    ];

    if let Some(url) = focused_url {
        spans.push(Span::styled(url.to_string(), Style::default().fg(C_URL)));
        spans.push(Span::raw(" "));
    }

    let keys = match mode {
        InputMode::Normal => " ↑↓/Tab move  ⇧Tab back  Enter open  y copy  ←→ scroll  / search  q quit",
        InputMode::Search => " type to search  Enter keep  Esc clear/close",
    };
    spans.push(Span::styled(keys, Style::default().fg(C_MUTED)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
