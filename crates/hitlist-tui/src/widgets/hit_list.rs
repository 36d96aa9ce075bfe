//! Results pane — renders the hit page and the focus controller's view state.
//!
//! The pane itself holds no navigation logic: it mirrors the controller's
//! effects (focused link, active entry, centering requests) and draws them.

use hitlist_core::config::UiConfig;
use hitlist_core::focus::Effect;
use hitlist_core::page::{Entry, EntryId, HitPage, LinkId};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{C_ACCENT, C_MUTED, C_PRIMARY, C_SECONDARY, C_SELECTION_BG, C_URL};
use crate::widgets::pane_chrome::{pane_chrome, Badge};

pub struct HitListView {
    scroll_offset: usize,
    hscroll: u16,
    active_entry: Option<EntryId>,
    focused_link: Option<LinkId>,
    /// Row to bring into view on the next draw, set by `ScrollToCenter`.
    pending_scroll: Option<usize>,
}

impl HitListView {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            hscroll: 0,
            active_entry: None,
            focused_link: None,
            pending_scroll: None,
        }
    }

    /// Forget all view state (the page was replaced).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Mirror one controller effect into the view.
    pub fn apply(&mut self, effect: Effect, page: &HitPage) {
        match effect {
            Effect::FocusLink(link) => self.focused_link = Some(link),
            Effect::ScrollToCenter(link) => {
                self.pending_scroll = page.entry_for(link).map(|e| e.index());
            }
            Effect::MarkActive(entry) => self.active_entry = Some(entry),
            Effect::ClearActive(entry) => {
                if self.active_entry == Some(entry) {
                    self.active_entry = None;
                }
                self.focused_link = None;
            }
        }
    }

    pub fn scroll_right(&mut self, step: u16) {
        self.hscroll = self.hscroll.saturating_add(step);
    }

    pub fn scroll_left(&mut self, step: u16) {
        self.hscroll = self.hscroll.saturating_sub(step);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        page: &HitPage,
        total: usize,
        nav_class: &str,
        focused: bool,
        ui: &UiConfig,
    ) {
        let badge_text = format!("{}/{}", page.len(), total);
        let block = pane_chrome(
            "results",
            focused,
            Some(Badge {
                text: &badge_text,
                color: C_MUTED,
            }),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if page.is_empty() {
            let msg = if total == 0 {
                "  no hits loaded"
            } else {
                "  no hits match the search"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(msg, Style::default().fg(C_MUTED))),
                inner,
            );
            return;
        }

        let height = inner.height as usize;
        if let Some(row) = self.pending_scroll.take() {
            self.scroll_offset = if ui.center_scroll {
                center_offset(row, height, page.len())
            } else {
                nudge_offset(self.scroll_offset, row, height)
            };
        }
        self.scroll_offset = self.scroll_offset.min(page.len().saturating_sub(1));

        let lines: Vec<Line> = page
            .entries()
            .skip(self.scroll_offset)
            .take(height)
            .map(|(id, entry)| self.render_row(id, entry, page, nav_class))
            .collect();

        frame.render_widget(Paragraph::new(lines).scroll((0, self.hscroll)), inner);
    }

    fn render_row<'a>(
        &self,
        id: EntryId,
        entry: &'a Entry,
        page: &'a HitPage,
        nav_class: &str,
    ) -> Line<'a> {
        let is_active = self.active_entry == Some(id);
        let navigable = entry.class == nav_class && entry.link.is_some();

        let marker = if is_active { "› " } else { "  " };
        let mut spans: Vec<Span> = vec![Span::styled(marker, Style::default().fg(C_ACCENT))];

        match entry.link {
            Some(link) => {
                let link = page.link(link);
                let title_style = if is_active {
                    Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
                } else if navigable {
                    Style::default().fg(C_SECONDARY)
                } else {
                    Style::default().fg(C_MUTED)
                };
                spans.push(Span::styled(link.title.as_str(), title_style));
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    link.url.as_str(),
                    Style::default().fg(if navigable { C_URL } else { C_MUTED }),
                ));
            }
            None => {
                spans.push(Span::styled(
                    entry.snippet.as_str(),
                    Style::default().fg(C_MUTED),
                ));
            }
        }

        if !navigable && !entry.class.is_empty() {
            spans.push(Span::styled(
                format!("  [{}]", entry.class),
                Style::default().fg(C_MUTED),
            ));
        }

        // Snippet shown on the active row only
        if is_active && !entry.snippet.is_empty() && entry.link.is_some() {
            spans.push(Span::styled(
                format!("  — {}", entry.snippet),
                Style::default().fg(C_SECONDARY),
            ));
        }

        let row_style = if is_active {
            Style::default().bg(C_SELECTION_BG)
        } else {
            Style::default()
        };
        Line::from(spans).style(row_style)
    }
}

impl Default for HitListView {
    fn default() -> Self {
        Self::new()
    }
}

/// Offset that puts `row` in the vertical middle of a `height`-row window
/// over `rows` rows, clamped so the window never runs past the end.
fn center_offset(row: usize, height: usize, rows: usize) -> usize {
    if height == 0 {
        return 0;
    }
    row.saturating_sub(height / 2).min(rows.saturating_sub(height))
}

/// Minimal scroll that brings `row` inside the window (non-centering mode).
fn nudge_offset(offset: usize, row: usize, height: usize) -> usize {
    if height == 0 {
        return offset;
    }
    if row < offset {
        row
    } else if row >= offset + height {
        row + 1 - height
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offset_centers_middle_rows() {
        assert_eq!(center_offset(10, 6, 40), 7);
        assert_eq!(center_offset(20, 7, 40), 17);
    }

    #[test]
    fn center_offset_clamps_at_edges() {
        assert_eq!(center_offset(0, 6, 40), 0);
        assert_eq!(center_offset(1, 6, 40), 0);
        assert_eq!(center_offset(39, 6, 40), 34);
        // Window taller than the list
        assert_eq!(center_offset(2, 10, 3), 0);
    }

    #[test]
    fn nudge_offset_only_moves_when_needed() {
        assert_eq!(nudge_offset(5, 7, 4), 5);
        assert_eq!(nudge_offset(5, 3, 4), 3);
        assert_eq!(nudge_offset(5, 9, 4), 6);
        assert_eq!(nudge_offset(0, 0, 0), 0);
    }

    #[test]
    fn clear_active_also_drops_focus_marker() {
        let page = HitPage::from_toml(
            r#"
            [[hit]]
            title = "a"
            url = "https://a.example"
            "#,
        )
        .unwrap();
        let (entry, link) = {
            let (id, e) = page.entries().next().unwrap();
            (id, e.link.unwrap())
        };
        let mut view = HitListView::new();
        view.apply(Effect::FocusLink(link), &page);
        view.apply(Effect::MarkActive(entry), &page);
        assert_eq!(view.active_entry, Some(entry));
        view.apply(Effect::ClearActive(entry), &page);
        assert_eq!(view.active_entry, None);
        assert_eq!(view.focused_link, None);
    }
}
