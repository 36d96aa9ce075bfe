//! Hit page model — the results container the focus controller navigates.
//!
//! A `HitPage` is built once (from a TOML file or by filtering an existing
//! page) and is immutable afterwards. Entries keep document order; links are
//! interned by URL so two entries that point at the same address share one
//! `LinkId`. The focus controller relies on that identity for its dedup pass.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Identity of an interned link within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(usize);

/// Identity of a result entry within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

impl EntryId {
    /// Position of the entry in page order. Stable for the page's lifetime.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A navigable link. One per distinct URL on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub title: String,
}

/// One result row: the entry wrapper around a link.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry kind — the controller only navigates entries of its configured
    /// class (e.g. sponsored rows carry a different class and are skipped).
    pub class: String,
    pub link: Option<LinkId>,
    pub snippet: String,
}

/// An ordered page of search hits plus the link arena they reference.
#[derive(Debug, Clone, Default)]
pub struct HitPage {
    entries: Vec<Entry>,
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct HitFile {
    #[serde(default)]
    hit: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    title: String,
    url: String,
    #[serde(default)]
    snippet: String,
    #[serde(default = "default_class")]
    class: String,
}

fn default_class() -> String {
    "hit".to_string()
}

impl HitPage {
    /// Load a page from a `hits.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading hits file {}", path.display()))?;
        let page = Self::from_toml(&content)
            .with_context(|| format!("parsing hits file {}", path.display()))?;
        tracing::info!(
            "loaded {} hits ({} distinct links) from {}",
            page.entries.len(),
            page.links.len(),
            path.display()
        );
        Ok(page)
    }

    /// Parse hits from TOML text, interning links by URL.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: HitFile = toml::from_str(content)?;
        let mut page = Self::default();
        let mut by_url: HashMap<String, LinkId> = HashMap::new();
        for raw in file.hit {
            let link = if raw.url.is_empty() {
                None
            } else {
                Some(*by_url.entry(raw.url.clone()).or_insert_with(|| {
                    page.links.push(Link {
                        url: raw.url,
                        title: raw.title,
                    });
                    LinkId(page.links.len() - 1)
                }))
            };
            page.entries.push(Entry {
                class: raw.class,
                link,
                snippet: raw.snippet,
            });
        }
        Ok(page)
    }

    /// Build a new page containing only the entries that match `query`.
    ///
    /// The link arena is carried over wholesale, so `LinkId`s taken from the
    /// filtered page are interchangeable with the parent's.
    pub fn filtered(&self, query: &str) -> Self {
        if query.trim().is_empty() {
            return self.clone();
        }
        Self {
            entries: self
                .entries
                .iter()
                .filter(|e| self.entry_matches(e, query))
                .cloned()
                .collect(),
            links: self.links.clone(),
        }
    }

    fn entry_matches(&self, entry: &Entry, query: &str) -> bool {
        let q = query.to_lowercase();
        let link_text = entry
            .link
            .map(|id| {
                let link = self.link(id);
                format!("{} {}", link.title.to_lowercase(), link.url.to_lowercase())
            })
            .unwrap_or_default();
        let text = format!("{} {}", link_text, entry.snippet.to_lowercase());
        q.split_whitespace().all(|term| text.contains(term))
    }

    /// Resolve the entry wrapper that owns `link`.
    ///
    /// Contract: returns the first entry in page order referencing the link.
    /// When several entries share a link, the first one is the wrapper that
    /// carries the active styling — the same one the extraction pass kept.
    pub fn entry_for(&self, link: LinkId) -> Option<EntryId> {
        self.entries
            .iter()
            .position(|e| e.link == Some(link))
            .map(EntryId)
    }

    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    pub fn entry(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }

    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct links on the page.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[hit]]
        title = "The Rust Book"
        url = "https://doc.rust-lang.org/book/"
        snippet = "Affectionately nicknamed the book."

        [[hit]]
        title = "Rust by Example"
        url = "https://doc.rust-lang.org/rust-by-example/"

        [[hit]]
        title = "The Rust Book (mirror)"
        url = "https://doc.rust-lang.org/book/"
        class = "mirror"
    "#;

    #[test]
    fn interns_links_by_url() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        assert_eq!(page.len(), 3);
        assert_eq!(page.link_count(), 2);
        let ids: Vec<_> = page.entries().map(|(_, e)| e.link.unwrap()).collect();
        assert_eq!(ids[0], ids[2]);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn interned_link_keeps_first_title() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        let (_, entry) = page.entries().nth(2).unwrap();
        assert_eq!(page.link(entry.link.unwrap()).title, "The Rust Book");
    }

    #[test]
    fn entry_for_returns_first_occurrence() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        let shared = page.entries().next().unwrap().1.link.unwrap();
        assert_eq!(page.entry_for(shared).unwrap().index(), 0);
    }

    #[test]
    fn filtered_keeps_link_ids_stable() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        let filtered = page.filtered("example");
        assert_eq!(filtered.len(), 1);
        let link = filtered.entries().next().unwrap().1.link.unwrap();
        assert_eq!(filtered.link(link).url, page.link(link).url);
    }

    #[test]
    fn filter_matches_every_term() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        assert_eq!(page.filtered("rust book").len(), 2);
        assert_eq!(page.filtered("rust example").len(), 1);
        assert_eq!(page.filtered("python").len(), 0);
    }

    #[test]
    fn blank_query_returns_everything() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        assert_eq!(page.filtered("  ").len(), 3);
    }

    #[test]
    fn empty_url_yields_linkless_entry() {
        let page = HitPage::from_toml(
            r#"
            [[hit]]
            title = "placeholder"
            url = ""
            "#,
        )
        .unwrap();
        assert_eq!(page.len(), 1);
        assert!(page.entries().next().unwrap().1.link.is_none());
        assert_eq!(page.link_count(), 0);
    }

    #[test]
    fn default_class_is_hit() {
        let page = HitPage::from_toml(SAMPLE).unwrap();
        assert_eq!(page.entries().next().unwrap().1.class, "hit");
        assert_eq!(page.entries().nth(2).unwrap().1.class, "mirror");
    }
}
