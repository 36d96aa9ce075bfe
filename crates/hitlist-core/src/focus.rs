//! FocusController — keyboard navigation over the links of a hit page.
//!
//! Exactly one link is focused at a time. The host feeds key events in and
//! applies the returned effects (focus, centering, active styling); the
//! controller never touches the view directly. While the search input holds
//! focus, every key passes through untouched so the input keeps its own
//! editing behavior.
//!
//! A controller is built over one immutable [`HitPage`]. When the page
//! changes (a new query), the host constructs a fresh controller — there is
//! no re-scan of a live container.

use crate::page::{EntryId, HitPage, LinkId};

/// Keys the controller understands. Anything else is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Tab,
    Right,
    Shift,
}

/// View updates the host must apply, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Give input focus to this link.
    FocusLink(LinkId),
    /// Bring the link's row to the vertical center of the viewport.
    ScrollToCenter(LinkId),
    /// Style this entry wrapper as active.
    MarkActive(EntryId),
    /// Remove the active styling from this entry wrapper.
    ClearActive(EntryId),
}

/// Whether the host may still run its default handling for the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The key is spent; default behavior is suppressed.
    Consumed,
    /// The controller did not claim the key.
    Passthrough,
}

/// Result of feeding one key-down event to the controller.
#[derive(Debug, Clone)]
pub struct KeyOutcome {
    pub disposition: Disposition,
    pub effects: Vec<Effect>,
}

impl KeyOutcome {
    fn passthrough() -> Self {
        Self {
            disposition: Disposition::Passthrough,
            effects: Vec::new(),
        }
    }
}

/// Navigation state over one page of hits.
pub struct FocusController {
    entry_class: String,
    /// Deduplicated navigable links, in entry order.
    links: Vec<LinkId>,
    /// Index of the link that should hold focus. Clamped to
    /// `0..links.len()`, never wraps.
    active: usize,
    /// The entry wrapper currently styled active, if any.
    active_entry: Option<EntryId>,
    shift_held: bool,
    link_focused: bool,
}

impl FocusController {
    /// Stores the entry-class filter; nothing else happens until [`init`].
    ///
    /// [`init`]: FocusController::init
    pub fn new(entry_class: impl Into<String>) -> Self {
        Self {
            entry_class: entry_class.into(),
            links: Vec::new(),
            active: 0,
            active_entry: None,
            shift_held: false,
            link_focused: false,
        }
    }

    /// Build the navigable link list and focus its first link.
    ///
    /// Entries whose class doesn't match are skipped, as are entries without
    /// a link. Entries sharing a link contribute it once (first occurrence
    /// wins), so no link can ever be focused under two indices. On an empty
    /// page this is a no-op and the controller stays inert.
    pub fn init(&mut self, page: &HitPage) -> Vec<Effect> {
        self.links.clear();
        for (_, entry) in page.entries() {
            if entry.class != self.entry_class {
                continue;
            }
            let Some(link) = entry.link else { continue };
            if !self.links.contains(&link) {
                self.links.push(link);
            }
        }
        self.active = 0;
        let mut effects = Vec::new();
        if !self.links.is_empty() {
            self.focus_link(page, &mut effects);
        }
        effects
    }

    /// Feed a key press. `search_focused` is the gate: while the search
    /// input holds focus these keys are left alone entirely.
    pub fn key_down(&mut self, key: NavKey, page: &HitPage, search_focused: bool) -> KeyOutcome {
        if search_focused {
            return KeyOutcome::passthrough();
        }

        let mut effects = Vec::new();
        let disposition = match key {
            NavKey::Up => {
                self.up(page, &mut effects);
                Disposition::Consumed
            }
            NavKey::Down => {
                self.down(page, &mut effects);
                Disposition::Consumed
            }
            NavKey::Tab => {
                if self.shift_held {
                    self.up(page, &mut effects);
                } else {
                    self.down(page, &mut effects);
                }
                Disposition::Consumed
            }
            NavKey::Right => {
                // Only the last link suppresses Right; everywhere else the
                // host's default handling runs.
                if !self.links.is_empty() && self.active == self.links.len() - 1 {
                    Disposition::Consumed
                } else {
                    Disposition::Passthrough
                }
            }
            NavKey::Shift => {
                self.shift_held = true;
                Disposition::Passthrough
            }
        };

        KeyOutcome {
            disposition,
            effects,
        }
    }

    /// Feed a key release. Not gated: a Shift released while the search
    /// input holds focus must still drop the flag.
    pub fn key_up(&mut self, key: NavKey) {
        if key == NavKey::Shift {
            self.shift_held = false;
        }
    }

    /// The focused link lost focus (any cause). Clears the active styling
    /// and forgets the wrapper; the index is kept, so the next navigation
    /// key resumes from where the user was.
    pub fn blur(&mut self) -> Vec<Effect> {
        self.link_focused = false;
        match self.active_entry.take() {
            Some(entry) => vec![Effect::ClearActive(entry)],
            None => Vec::new(),
        }
    }

    fn up(&mut self, page: &HitPage, effects: &mut Vec<Effect>) {
        if self.links.is_empty() {
            return;
        }
        self.active = self.active.saturating_sub(1);
        self.focus_link(page, effects);
    }

    fn down(&mut self, page: &HitPage, effects: &mut Vec<Effect>) {
        if self.links.is_empty() {
            return;
        }
        if self.active + 1 < self.links.len() {
            self.active += 1;
        }
        self.focus_link(page, effects);
    }

    /// Focus application for the link at the current index: focus it, center
    /// it, and move the active styling to its entry wrapper. The old
    /// wrapper's clear is emitted first, since a focus change blurs the old
    /// element before the new one gains focus.
    fn focus_link(&mut self, page: &HitPage, effects: &mut Vec<Effect>) {
        let link = self.links[self.active];
        if let Some(old) = self.active_entry.take() {
            effects.push(Effect::ClearActive(old));
        }
        effects.push(Effect::FocusLink(link));
        effects.push(Effect::ScrollToCenter(link));
        if let Some(entry) = page.entry_for(link) {
            self.active_entry = Some(entry);
            effects.push(Effect::MarkActive(entry));
        }
        self.link_focused = true;
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn focused_link(&self) -> Option<LinkId> {
        self.links.get(self.active).copied()
    }

    pub fn active_entry(&self) -> Option<EntryId> {
        self.active_entry
    }

    pub fn is_link_focused(&self) -> bool {
        self.link_focused
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
