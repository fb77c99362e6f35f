use std::fs::File;
use std::io::{stdout, Write};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use simplelog::{Config, LevelFilter, WriteLogger};
use sidenav::sidebar::SUBMENU_TOGGLE;
use sidenav::{
    find_element, marker, process_events, Element, Event, Key, LayoutResult, Rect, SidebarBindings,
    SidebarController,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut root = ui();
    let controller = SidebarController::bind(
        &mut root,
        SidebarBindings::new("toggle-btn", "sidebar", "open-icon", "close-icon"),
    )
    .map_err(|err| std::io::Error::new(std::io::ErrorKind::NotFound, err.to_string()))?;
    let layout = layout();

    enable_raw_mode()?;
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(&controller, &mut root, &layout);

    execute!(stdout(), DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

fn run(
    controller: &SidebarController,
    root: &mut Element,
    layout: &LayoutResult,
) -> std::io::Result<()> {
    let mut out = stdout();
    write!(out, "click the trigger at the top-left, q to quit\r\n")?;
    status(&mut out, controller, root)?;

    loop {
        let raw = event::read()?;
        for event in process_events(&[raw], root, layout) {
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
            if controller.handle_event(&event, root) {
                status(&mut out, controller, root)?;
            }
        }
    }
}

fn status(
    out: &mut impl Write,
    controller: &SidebarController,
    root: &Element,
) -> std::io::Result<()> {
    let reports = find_element(root, "reports-menu")
        .map(|panel| panel.has_marker(marker::EXPANDED))
        .unwrap_or(false);
    write!(
        out,
        "sidebar closed={} reports expanded={}\r\n",
        controller.is_closed(root),
        reports
    )?;
    out.flush()
}

fn ui() -> Element {
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
                        .child(Element::text("Weekly").id("nav-weekly").clickable(true))
                        .child(Element::text("Monthly").id("nav-monthly").clickable(true)),
                ),
        )
}

fn layout() -> LayoutResult {
    let mut layout = LayoutResult::new();
    layout.insert("app".to_string(), Rect::new(0, 0, 80, 24));
    layout.insert("toggle-btn".to_string(), Rect::new(0, 0, 6, 1));
    layout.insert("open-icon".to_string(), Rect::new(0, 0, 3, 1));
    layout.insert("close-icon".to_string(), Rect::new(3, 0, 3, 1));
    layout.insert("sidebar".to_string(), Rect::new(0, 1, 20, 23));
    layout.insert("nav-dashboard".to_string(), Rect::new(0, 2, 20, 1));
    layout.insert("reports-toggle".to_string(), Rect::new(0, 3, 20, 1));
    layout.insert("reports-menu".to_string(), Rect::new(0, 4, 20, 2));
    layout.insert("nav-weekly".to_string(), Rect::new(2, 4, 18, 1));
    layout.insert("nav-monthly".to_string(), Rect::new(2, 5, 18, 1));
    layout
}
