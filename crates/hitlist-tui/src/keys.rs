//! Crossterm → controller key translation.
//!
//! Terminals don't report modifier keys as events of their own, so the
//! controller's Shift press/release tracking is fed synthetically: every key
//! event carries modifier bits, and [`ShiftSync`] reports a transition
//! whenever those bits disagree with the last known state. A held Shift is
//! therefore observed on the first key it modifies, still before the Tab it
//! turns around.

use hitlist_core::focus::NavKey;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to the controller's vocabulary. `None` means the
/// controller has no interest and the key is the host's alone.
pub fn nav_key_for(key: &KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        // BackTab is what most terminals deliver for Shift+Tab.
        KeyCode::Tab | KeyCode::BackTab => Some(NavKey::Tab),
        KeyCode::Right => Some(NavKey::Right),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftTransition {
    Pressed,
    Released,
}

/// Last known Shift state, derived from modifier bits.
#[derive(Debug, Default)]
pub struct ShiftSync {
    held: bool,
}

impl ShiftSync {
    /// Compare the event's modifiers against the tracked state and report a
    /// transition when they disagree.
    pub fn observe(&mut self, key: &KeyEvent) -> Option<ShiftTransition> {
        let held = key.modifiers.contains(KeyModifiers::SHIFT) || key.code == KeyCode::BackTab;
        if held == self.held {
            return None;
        }
        self.held = held;
        Some(if held {
            ShiftTransition::Pressed
        } else {
            ShiftTransition::Released
        })
    }

    /// Forget the tracked state (page change). The next modified key will
    /// report a fresh transition.
    pub fn reset(&mut self) {
        self.held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyEvent;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(
            nav_key_for(&key(KeyCode::Up, KeyModifiers::NONE)),
            Some(NavKey::Up)
        );
        assert_eq!(
            nav_key_for(&key(KeyCode::Down, KeyModifiers::NONE)),
            Some(NavKey::Down)
        );
        assert_eq!(
            nav_key_for(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(NavKey::Tab)
        );
        assert_eq!(
            nav_key_for(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(NavKey::Tab)
        );
        assert_eq!(
            nav_key_for(&key(KeyCode::Right, KeyModifiers::NONE)),
            Some(NavKey::Right)
        );
        assert_eq!(nav_key_for(&key(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(
            nav_key_for(&key(KeyCode::Char('j'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn shift_sync_reports_edges_only() {
        let mut sync = ShiftSync::default();
        assert_eq!(
            sync.observe(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(ShiftTransition::Pressed)
        );
        assert_eq!(sync.observe(&key(KeyCode::BackTab, KeyModifiers::SHIFT)), None);
        assert_eq!(
            sync.observe(&key(KeyCode::Down, KeyModifiers::NONE)),
            Some(ShiftTransition::Released)
        );
        assert_eq!(sync.observe(&key(KeyCode::Down, KeyModifiers::NONE)), None);
    }

    #[test]
    fn bare_backtab_counts_as_shift() {
        // Some terminals send BackTab without the SHIFT bit.
        let mut sync = ShiftSync::default();
        assert_eq!(
            sync.observe(&key(KeyCode::BackTab, KeyModifiers::NONE)),
            Some(ShiftTransition::Pressed)
        );
    }

    #[test]
    fn reset_forgets_held_state() {
        let mut sync = ShiftSync::default();
        sync.observe(&key(KeyCode::Char('A'), KeyModifiers::SHIFT));
        sync.reset();
        assert_eq!(
            sync.observe(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(ShiftTransition::Pressed)
        );
    }
}
