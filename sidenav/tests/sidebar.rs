use sidenav::sidebar::SUBMENU_TOGGLE;
use sidenav::{find_element, find_element_mut, marker, Element, SidebarBindings, SidebarController};

fn app() -> Element {
    Element::box_()
        .id("app")
        .child(
            Element::box_()
                .id("toggle-btn")
                .clickable(true)
                .child(Element::text("menu").id("open-icon"))
                .child(Element::text("close").id("close-icon")),
        )
        .child(
            Element::box_()
                .id("sidebar")
                .child(Element::text("Dashboard").id("nav-dashboard").clickable(true))
                .child(Element::text("Reports").id("reports-toggle").clickable(true))
                .child(
                    Element::box_()
                        .id("reports-menu")
                        .data(SUBMENU_TOGGLE, "reports-toggle")
                        .child(Element::text("Weekly").id("nav-weekly").clickable(true)),
                )
                .child(Element::text("Admin").id("admin-toggle").clickable(true))
                // No explicit link: paired through sibling adjacency
                .child(
                    Element::box_()
                        .id("admin-menu")
                        .child(Element::text("Users").id("nav-users").clickable(true)),
                ),
        )
}

fn bindings() -> SidebarBindings {
    SidebarBindings::new("toggle-btn", "sidebar", "open-icon", "close-icon")
}

fn has(root: &Element, id: &str, name: &str) -> bool {
    find_element(root, id).unwrap().has_marker(name)
}

fn expand(root: &mut Element, panel: &str, toggle: &str) {
    find_element_mut(root, panel).unwrap().add_marker(marker::EXPANDED);
    find_element_mut(root, toggle).unwrap().add_marker(marker::ROTATED);
}

// ============================================================================
// Initial State
// ============================================================================

#[test]
fn bind_establishes_starting_state() {
    let mut root = app();
    SidebarController::bind(&mut root, bindings()).unwrap();

    assert!(has(&root, "sidebar", marker::CLOSED));
    assert!(!has(&root, "open-icon", marker::HIDDEN));
    assert!(has(&root, "close-icon", marker::HIDDEN));
}

#[test]
fn bind_normalizes_authored_markers() {
    // Markup authored the wrong way around: sidebar open, hamburger hidden,
    // close icon visible.
    let mut root = Element::box_()
        .id("app")
        .child(
            Element::box_()
                .id("toggle-btn")
                .child(Element::text("menu").id("open-icon").marker(marker::HIDDEN))
                .child(Element::text("close").id("close-icon")),
        )
        .child(Element::box_().id("sidebar"));

    SidebarController::bind(&mut root, bindings()).unwrap();

    assert!(has(&root, "sidebar", marker::CLOSED));
    assert!(!has(&root, "open-icon", marker::HIDDEN));
    assert!(has(&root, "close-icon", marker::HIDDEN));
}

#[test]
fn bind_fails_when_sidebar_missing() {
    let mut root = Element::box_()
        .id("app")
        .child(
            Element::box_()
                .id("toggle-btn")
                .child(Element::text("menu").id("open-icon"))
                .child(Element::text("close").id("close-icon").marker(marker::HIDDEN)),
        );
    let before = root.clone();

    let err = SidebarController::bind(&mut root, bindings()).unwrap_err();

    assert_eq!(err.role, "sidebar");
    assert_eq!(err.id, "sidebar");
    // Failed binding must not have touched the tree
    assert_eq!(root, before);
}

#[test]
fn bind_fails_when_icon_missing() {
    let mut root = Element::box_()
        .id("app")
        .child(Element::box_().id("toggle-btn"))
        .child(Element::box_().id("sidebar"));

    let err = SidebarController::bind(&mut root, bindings()).unwrap_err();
    assert_eq!(err.role, "open icon");
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn toggle_flips_sidebar_and_both_icons() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    controller.toggle_sidebar(&mut root);

    assert!(!has(&root, "sidebar", marker::CLOSED));
    assert!(has(&root, "open-icon", marker::HIDDEN));
    assert!(!has(&root, "close-icon", marker::HIDDEN));
    assert!(!controller.is_closed(&root));
}

#[test]
fn double_toggle_is_identity() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    controller.toggle_sidebar(&mut root);
    controller.toggle_sidebar(&mut root);

    assert!(has(&root, "sidebar", marker::CLOSED));
    assert!(!has(&root, "open-icon", marker::HIDDEN));
    assert!(has(&root, "close-icon", marker::HIDDEN));
}

#[test]
fn icons_stay_opposite_across_any_toggle_sequence() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    for _ in 0..7 {
        controller.toggle_sidebar(&mut root);
        assert_ne!(
            has(&root, "open-icon", marker::HIDDEN),
            has(&root, "close-icon", marker::HIDDEN)
        );
    }
}

// ============================================================================
// Sub-menu collapse
// ============================================================================

#[test]
fn opening_collapses_expanded_sub_menu() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();
    expand(&mut root, "reports-menu", "reports-toggle");

    controller.toggle_sidebar(&mut root);

    assert!(!has(&root, "sidebar", marker::CLOSED));
    assert!(has(&root, "open-icon", marker::HIDDEN));
    assert!(!has(&root, "close-icon", marker::HIDDEN));
    assert!(!has(&root, "reports-menu", marker::EXPANDED));
    assert!(!has(&root, "reports-toggle", marker::ROTATED));
    // The other panel was collapsed already and stays untouched
    assert!(!has(&root, "admin-menu", marker::EXPANDED));
    assert!(!has(&root, "admin-toggle", marker::ROTATED));
}

#[test]
fn closing_also_collapses_expanded_sub_menu() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    // Open, expand while open, then close
    controller.toggle_sidebar(&mut root);
    expand(&mut root, "reports-menu", "reports-toggle");
    controller.toggle_sidebar(&mut root);

    assert!(has(&root, "sidebar", marker::CLOSED));
    assert!(!has(&root, "open-icon", marker::HIDDEN));
    assert!(has(&root, "close-icon", marker::HIDDEN));
    assert!(!has(&root, "reports-menu", marker::EXPANDED));
    assert!(!has(&root, "reports-toggle", marker::ROTATED));
}

#[test]
fn collapse_uses_sibling_pairing_when_no_link() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();
    expand(&mut root, "admin-menu", "admin-toggle");

    controller.close_all_sub_menus(&mut root);

    assert!(!has(&root, "admin-menu", marker::EXPANDED));
    assert!(!has(&root, "admin-toggle", marker::ROTATED));
}

#[test]
fn explicit_link_wins_over_sibling_adjacency() {
    // reports-menu's preceding sibling is a decoy here; the link names the
    // real affordance elsewhere in the sidebar.
    let mut root = Element::box_()
        .id("app")
        .child(
            Element::box_()
                .id("toggle-btn")
                .child(Element::text("menu").id("open-icon"))
                .child(Element::text("close").id("close-icon")),
        )
        .child(
            Element::box_()
                .id("sidebar")
                .child(Element::text("real").id("real-toggle"))
                .child(Element::text("decoy").id("decoy").marker(marker::ROTATED))
                .child(
                    Element::box_()
                        .id("reports-menu")
                        .data(SUBMENU_TOGGLE, "real-toggle")
                        .marker(marker::EXPANDED),
                ),
        );
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();
    find_element_mut(&mut root, "real-toggle").unwrap().add_marker(marker::ROTATED);

    controller.close_all_sub_menus(&mut root);

    assert!(!has(&root, "reports-menu", marker::EXPANDED));
    assert!(!has(&root, "real-toggle", marker::ROTATED));
    // The decoy sibling is not the pair and keeps its marker
    assert!(has(&root, "decoy", marker::ROTATED));
}

#[test]
fn collapse_is_noop_when_nothing_expanded() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();
    let before = root.clone();

    controller.close_all_sub_menus(&mut root);

    assert_eq!(root, before);
}

#[test]
fn panels_added_after_bind_are_collapsed_too() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    find_element_mut(&mut root, "sidebar").unwrap().push_child(
        Element::box_()
            .id("late-menu")
            .data(SUBMENU_TOGGLE, "admin-toggle")
            .marker(marker::EXPANDED),
    );
    controller.toggle_sidebar(&mut root);

    assert!(!has(&root, "late-menu", marker::EXPANDED));
}

// ============================================================================
// Sub-menu expansion
// ============================================================================

#[test]
fn toggle_sub_menu_keeps_expanded_and_rotated_equal() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    assert!(controller.toggle_sub_menu(&mut root, "reports-menu"));
    assert!(has(&root, "reports-menu", marker::EXPANDED));
    assert!(has(&root, "reports-toggle", marker::ROTATED));

    assert!(controller.toggle_sub_menu(&mut root, "reports-menu"));
    assert!(!has(&root, "reports-menu", marker::EXPANDED));
    assert!(!has(&root, "reports-toggle", marker::ROTATED));
}

#[test]
fn toggle_sub_menu_pairs_through_sibling_adjacency() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    assert!(controller.toggle_sub_menu(&mut root, "admin-menu"));
    assert!(has(&root, "admin-menu", marker::EXPANDED));
    assert!(has(&root, "admin-toggle", marker::ROTATED));
}

#[test]
fn toggle_sub_menu_outside_sidebar_is_rejected() {
    let mut root = app();
    let controller = SidebarController::bind(&mut root, bindings()).unwrap();

    // The trigger is not a descendant of the sidebar container
    assert!(!controller.toggle_sub_menu(&mut root, "toggle-btn"));
    assert!(!controller.toggle_sub_menu(&mut root, "missing"));
}
