use thiserror::Error;

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::event::Event;

/// Marker names the controller flips. The host's styling layer keys its
/// rules off these.
pub mod marker {
    /// On the sidebar container. Sole source of truth for visibility.
    pub const CLOSED: &str = "closed";
    /// On the open/close icons. Exactly one of the two carries it.
    pub const HIDDEN: &str = "hidden";
    /// On an expanded sub-menu panel.
    pub const EXPANDED: &str = "expanded";
    /// On the toggle affordance of an expanded panel. Always equal to its
    /// panel's `EXPANDED`.
    pub const ROTATED: &str = "rotated";
}

/// Data key on a sub-menu panel naming its toggle affordance by id.
///
/// When absent, the affordance is taken to be the panel's immediately
/// preceding sibling. The explicit link wins when both apply.
pub const SUBMENU_TOGGLE: &str = "submenu-toggle";

/// Element ids the controller binds to.
#[derive(Debug, Clone)]
pub struct SidebarBindings {
    pub trigger: String,
    pub sidebar: String,
    pub open_icon: String,
    pub close_icon: String,
}

impl SidebarBindings {
    pub fn new(
        trigger: impl Into<String>,
        sidebar: impl Into<String>,
        open_icon: impl Into<String>,
        close_icon: impl Into<String>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            sidebar: sidebar.into(),
            open_icon: open_icon.into(),
            close_icon: close_icon.into(),
        }
    }
}

/// A required element id could not be resolved at bind time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{role} element '{id}' not found in tree")]
pub struct BindingError {
    pub role: &'static str,
    pub id: String,
}

/// Toggles a sidebar's open/closed state and the paired hamburger/close
/// icons, and collapses expanded sub-menus on every toggle.
///
/// The controller never owns elements; the host owns the tree and passes
/// the root to each operation. Sub-menus are re-scanned live on every
/// collapse, so panels added after binding are picked up.
#[derive(Debug, Clone)]
pub struct SidebarController {
    trigger: String,
    sidebar: String,
    open_icon: String,
    close_icon: String,
}

impl SidebarController {
    /// Resolve the four required bindings and establish the starting state:
    /// sidebar closed, open icon visible, close icon hidden — regardless of
    /// the markers the tree was authored with.
    ///
    /// Fails without touching the tree if any binding is missing. Sub-menus
    /// are not resolved here; an empty collection is legitimate.
    pub fn bind(root: &mut Element, bindings: SidebarBindings) -> Result<Self, BindingError> {
        let required = [
            ("trigger", &bindings.trigger),
            ("sidebar", &bindings.sidebar),
            ("open icon", &bindings.open_icon),
            ("close icon", &bindings.close_icon),
        ];
        for (role, id) in required {
            if find_element(root, id).is_none() {
                return Err(BindingError {
                    role,
                    id: id.clone(),
                });
            }
        }

        let controller = Self {
            trigger: bindings.trigger,
            sidebar: bindings.sidebar,
            open_icon: bindings.open_icon,
            close_icon: bindings.close_icon,
        };

        if let Some(sidebar) = find_element_mut(root, &controller.sidebar) {
            sidebar.set_marker(marker::CLOSED, true);
        }
        if let Some(icon) = find_element_mut(root, &controller.open_icon) {
            icon.set_marker(marker::HIDDEN, false);
        }
        if let Some(icon) = find_element_mut(root, &controller.close_icon) {
            icon.set_marker(marker::HIDDEN, true);
        }

        log::debug!(
            "[sidebar] bound trigger={} sidebar={} open_icon={} close_icon={}",
            controller.trigger,
            controller.sidebar,
            controller.open_icon,
            controller.close_icon
        );

        Ok(controller)
    }

    /// Flip the sidebar open/closed, flip both icon visibilities, and
    /// collapse every expanded sub-menu — whether the sidebar just opened
    /// or closed. One call per trigger activation; no debouncing.
    pub fn toggle_sidebar(&self, root: &mut Element) {
        if let Some(sidebar) = find_element_mut(root, &self.sidebar) {
            sidebar.toggle_marker(marker::CLOSED);
        }
        if let Some(icon) = find_element_mut(root, &self.open_icon) {
            icon.toggle_marker(marker::HIDDEN);
        }
        if let Some(icon) = find_element_mut(root, &self.close_icon) {
            icon.toggle_marker(marker::HIDDEN);
        }

        self.close_all_sub_menus(root);

        log::debug!("[sidebar] toggled, closed={}", self.is_closed(root));
    }

    /// Collapse every sub-menu panel currently expanded inside the sidebar,
    /// clearing the paired affordance's rotation with it. Re-scans the
    /// sidebar's current subtree; a no-op when nothing is expanded.
    pub fn close_all_sub_menus(&self, root: &mut Element) {
        let mut pairs = Vec::new();
        if let Some(sidebar) = find_element(root, &self.sidebar) {
            collect_expanded(sidebar, &mut pairs);
        }
        if pairs.is_empty() {
            return;
        }

        log::debug!("[sidebar] collapsing {} sub-menu(s)", pairs.len());
        for (panel_id, toggle_id) in pairs {
            if let Some(panel) = find_element_mut(root, &panel_id) {
                panel.remove_marker(marker::EXPANDED);
            }
            if let Some(toggle_id) = toggle_id {
                if let Some(toggle) = find_element_mut(root, &toggle_id) {
                    toggle.remove_marker(marker::ROTATED);
                }
            }
        }
    }

    /// Flip a sub-menu panel's expanded state, keeping its affordance's
    /// rotation equal to it. Returns false if the panel is not a descendant
    /// of the sidebar container.
    pub fn toggle_sub_menu(&self, root: &mut Element, panel_id: &str) -> bool {
        let pair = find_element(root, &self.sidebar).and_then(|sidebar| locate_panel(sidebar, panel_id));
        let (panel_id, toggle_id) = match pair {
            Some(pair) => pair,
            None => return false,
        };

        let expanded = match find_element_mut(root, &panel_id) {
            Some(panel) => panel.toggle_marker(marker::EXPANDED),
            None => return false,
        };
        if let Some(toggle_id) = toggle_id {
            if let Some(toggle) = find_element_mut(root, &toggle_id) {
                toggle.set_marker(marker::ROTATED, expanded);
            }
        }

        log::debug!("[sidebar] sub-menu {panel_id} expanded={expanded}");
        true
    }

    /// Route a high-level event. Clicks on the trigger toggle the sidebar;
    /// clicks on an explicitly-linked sub-menu affordance toggle its panel.
    /// Returns whether the event was consumed.
    pub fn handle_event(&self, event: &Event, root: &mut Element) -> bool {
        let target = match event {
            Event::Click {
                target: Some(target),
                ..
            } => target.clone(),
            _ => return false,
        };

        if target == self.trigger {
            self.toggle_sidebar(root);
            return true;
        }

        // A collapsed panel is only identifiable through the explicit link,
        // so sibling-adjacency pairing does not participate in routing.
        let panel = find_element(root, &self.sidebar).and_then(|sidebar| find_linked_panel(sidebar, &target));
        if let Some(panel_id) = panel {
            self.toggle_sub_menu(root, &panel_id);
            return true;
        }

        false
    }

    pub fn is_closed(&self, root: &Element) -> bool {
        find_element(root, &self.sidebar)
            .map(|sidebar| sidebar.has_marker(marker::CLOSED))
            .unwrap_or(true)
    }

    pub fn trigger_id(&self) -> &str {
        &self.trigger
    }

    pub fn sidebar_id(&self) -> &str {
        &self.sidebar
    }
}

/// Collect (panel, affordance) id pairs for every expanded panel in the
/// subtree. Affordance resolution: explicit link, else preceding sibling,
/// else none.
fn collect_expanded(element: &Element, pairs: &mut Vec<(String, Option<String>)>) {
    if let Content::Children(children) = &element.content {
        for (i, child) in children.iter().enumerate() {
            if child.has_marker(marker::EXPANDED) {
                let toggle = child
                    .get_data(SUBMENU_TOGGLE)
                    .cloned()
                    .or_else(|| (i > 0).then(|| children[i - 1].id.clone()));
                pairs.push((child.id.clone(), toggle));
            }
            collect_expanded(child, pairs);
        }
    }
}

/// Find a panel by id in the subtree, resolving its affordance from the
/// sibling context it sits in.
fn locate_panel(element: &Element, panel_id: &str) -> Option<(String, Option<String>)> {
    if let Content::Children(children) = &element.content {
        for (i, child) in children.iter().enumerate() {
            if child.id == panel_id {
                let toggle = child
                    .get_data(SUBMENU_TOGGLE)
                    .cloned()
                    .or_else(|| (i > 0).then(|| children[i - 1].id.clone()));
                return Some((child.id.clone(), toggle));
            }
            if let Some(found) = locate_panel(child, panel_id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the panel that names the given affordance via its explicit link.
fn find_linked_panel(element: &Element, toggle_id: &str) -> Option<String> {
    if element
        .get_data(SUBMENU_TOGGLE)
        .map(|linked| linked == toggle_id)
        .unwrap_or(false)
    {
        return Some(element.id.clone());
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if let Some(found) = find_linked_panel(child, toggle_id) {
                return Some(found);
            }
        }
    }

    None
}
