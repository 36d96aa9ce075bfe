//! Color palette and style constants for the hitlist TUI.

use ratatui::style::{Color, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_ACCENT: Color = Color::Rgb(255, 122, 89);
pub const C_PRIMARY: Color = Color::Rgb(214, 214, 226);
pub const C_SECONDARY: Color = Color::Rgb(122, 122, 146);
pub const C_MUTED: Color = Color::Rgb(74, 74, 92);
pub const C_SELECTION_BG: Color = Color::Rgb(30, 30, 44);
pub const C_PANEL_BORDER: Color = Color::Rgb(42, 42, 56);
pub const C_PANEL_BORDER_FOCUSED: Color = Color::Rgb(110, 114, 212);
pub const C_URL: Color = Color::Rgb(96, 150, 212);
pub const C_SEARCH_BG: Color = Color::Rgb(22, 22, 34);
pub const C_SEARCH_FG: Color = Color::Rgb(255, 204, 92);
pub const C_MODE_NORMAL: Color = Color::Rgb(122, 122, 146);
pub const C_MODE_SEARCH: Color = Color::Rgb(255, 204, 92);
pub const C_TOAST_INFO: Color = Color::Rgb(86, 162, 220);
pub const C_TOAST_SUCCESS: Color = Color::Rgb(92, 200, 128);
pub const C_TOAST_ERROR: Color = Color::Rgb(255, 98, 98);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_focused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER_FOCUSED)
}

pub fn style_unfocused_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_search() -> Style {
    Style::default().fg(C_SEARCH_FG).bg(C_SEARCH_BG)
}
