use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the host-owned UI tree.
///
/// Elements carry named *markers*: boolean visual-state flags read by the
/// host's styling layer. A marker is "true" when present in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Visual-state markers (ordered set for deterministic Debug output)
    pub markers: BTreeSet<String>,

    // Interaction
    pub clickable: bool,

    // Custom data storage (for pairing links, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            markers: BTreeSet::new(),
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markers
    pub fn marker(mut self, name: impl Into<String>) -> Self {
        self.markers.insert(name.into());
        self
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    pub fn add_marker(&mut self, name: &str) {
        self.markers.insert(name.to_string());
    }

    pub fn remove_marker(&mut self, name: &str) {
        self.markers.remove(name);
    }

    /// Flip a marker, returning whether it is now present.
    pub fn toggle_marker(&mut self, name: &str) -> bool {
        if self.markers.remove(name) {
            false
        } else {
            self.markers.insert(name.to_string());
            true
        }
    }

    pub fn set_marker(&mut self, name: &str, present: bool) {
        if present {
            self.markers.insert(name.to_string());
        } else {
            self.markers.remove(name);
        }
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Append a child to an already-built element.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
    }
}
