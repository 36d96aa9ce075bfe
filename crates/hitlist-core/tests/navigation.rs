//! End-to-end walks over the focus controller, driven the way the TUI
//! drives it: feed key events, apply the returned effects to a tiny view
//! model, and check what a user would see.

use std::collections::HashSet;

use hitlist_core::focus::{Disposition, Effect, FocusController, NavKey};
use hitlist_core::page::{EntryId, HitPage, LinkId};

const THREE_HITS: &str = r#"
    [[hit]]
    title = "alpha"
    url = "https://alpha.example"
    snippet = "first hit"

    [[hit]]
    title = "beta"
    url = "https://beta.example"
    snippet = "second hit"

    [[hit]]
    title = "gamma"
    url = "https://gamma.example"
    snippet = "third hit"
"#;

/// Minimal stand-in for the rendered page: tracks which link holds focus
/// and which entries carry the active styling.
#[derive(Default)]
struct View {
    focused: Option<LinkId>,
    active: HashSet<EntryId>,
}

impl View {
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::FocusLink(link) => self.focused = Some(link),
                Effect::ScrollToCenter(_) => {}
                Effect::MarkActive(entry) => {
                    self.active.insert(entry);
                }
                Effect::ClearActive(entry) => {
                    self.active.remove(&entry);
                }
            }
        }
        assert!(self.active.len() <= 1, "more than one entry styled active");
    }

    fn active_entry(&self) -> Option<EntryId> {
        self.active.iter().copied().next()
    }
}

fn setup(toml: &str) -> (HitPage, FocusController, View) {
    let page = HitPage::from_toml(toml).unwrap();
    let mut fc = FocusController::new("hit");
    let mut view = View::default();
    view.apply(&fc.init(&page));
    (page, fc, view)
}

fn press(fc: &mut FocusController, view: &mut View, page: &HitPage, key: NavKey) -> Disposition {
    let out = fc.key_down(key, page, false);
    view.apply(&out.effects);
    out.disposition
}

#[test]
fn down_navigation_walk() {
    let (page, mut fc, mut view) = setup(THREE_HITS);
    let links: Vec<_> = page.entries().filter_map(|(_, e)| e.link).collect();
    let entries: Vec<_> = page.entries().map(|(id, _)| id).collect();

    // After init: alpha focused, its entry active.
    assert_eq!(view.focused, Some(links[0]));
    assert_eq!(view.active_entry(), Some(entries[0]));

    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(fc.active_index(), 1);
    assert_eq!(view.focused, Some(links[1]));
    assert_eq!(view.active_entry(), Some(entries[1]));

    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(fc.active_index(), 2);
    assert_eq!(view.focused, Some(links[2]));
    assert_eq!(view.active_entry(), Some(entries[2]));

    // Clamped at the end: gamma stays focused.
    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(fc.active_index(), 2);
    assert_eq!(view.focused, Some(links[2]));
    assert_eq!(view.active_entry(), Some(entries[2]));
}

#[test]
fn shift_tab_walk() {
    let (page, mut fc, mut view) = setup(THREE_HITS);
    let links: Vec<_> = page.entries().filter_map(|(_, e)| e.link).collect();

    press(&mut fc, &mut view, &page, NavKey::Down);
    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(view.focused, Some(links[2]));

    // Hold Shift, Tab goes backwards.
    press(&mut fc, &mut view, &page, NavKey::Shift);
    press(&mut fc, &mut view, &page, NavKey::Tab);
    assert_eq!(fc.active_index(), 1);
    assert_eq!(view.focused, Some(links[1]));

    // Release Shift, Tab goes forwards again.
    fc.key_up(NavKey::Shift);
    press(&mut fc, &mut view, &page, NavKey::Tab);
    assert_eq!(fc.active_index(), 2);
    assert_eq!(view.focused, Some(links[2]));
}

#[test]
fn typing_in_search_changes_nothing() {
    let (page, mut fc, mut view) = setup(THREE_HITS);
    let before_focus = view.focused;
    let before_index = fc.active_index();

    for key in [NavKey::Up, NavKey::Down, NavKey::Tab] {
        let out = fc.key_down(key, &page, true);
        assert_eq!(out.disposition, Disposition::Passthrough);
        view.apply(&out.effects);
    }

    assert_eq!(fc.active_index(), before_index);
    assert_eq!(view.focused, before_focus);
}

#[test]
fn fresh_controller_over_filtered_page() {
    let (page, mut fc, mut view) = setup(THREE_HITS);
    press(&mut fc, &mut view, &page, NavKey::Down);

    // The query narrows the page; the old controller is discarded and the
    // active styling cleared, as when a new results page loads.
    view.apply(&fc.blur());
    assert!(view.active.is_empty());

    let narrowed = page.filtered("beta");
    assert_eq!(narrowed.len(), 1);
    let mut fc = FocusController::new("hit");
    view.apply(&fc.init(&narrowed));

    let beta = narrowed.entries().next().unwrap().1.link.unwrap();
    assert_eq!(view.focused, Some(beta));
    assert_eq!(narrowed.link(beta).title, "beta");
    assert_eq!(fc.active_index(), 0);

    // Navigation over a single link clamps in both directions.
    press(&mut fc, &mut view, &narrowed, NavKey::Down);
    press(&mut fc, &mut view, &narrowed, NavKey::Up);
    assert_eq!(fc.active_index(), 0);
    assert_eq!(view.focused, Some(beta));
}

#[test]
fn right_key_boundary_walk() {
    let (page, mut fc, mut view) = setup(THREE_HITS);

    assert_eq!(press(&mut fc, &mut view, &page, NavKey::Right), Disposition::Passthrough);
    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(press(&mut fc, &mut view, &page, NavKey::Right), Disposition::Passthrough);
    press(&mut fc, &mut view, &page, NavKey::Down);
    assert_eq!(press(&mut fc, &mut view, &page, NavKey::Right), Disposition::Consumed);
    // Suppression does not move focus.
    assert_eq!(fc.active_index(), 2);
}
