use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use linkdom::{Document, Element, Event, Key, Modifiers};
use linkfilter::{FilterEvent, LinkFilters, NOT_MATCH_CLASS, Options};
use simplelog::{Config, LevelFilter, WriteLogger};

const LINKS: &[(&str, &str)] = &[
    ("Getting started", "/docs/start"),
    ("Installation", "/docs/install"),
    ("Configuration", "/docs/config"),
    ("Keyboard shortcuts", "/docs/keys"),
    ("Filtering lists", "/docs/filter"),
    ("Events", "/docs/events"),
    ("Troubleshooting", "/docs/trouble"),
    ("Changelog", "/changelog"),
];

fn build_document() -> Document {
    let items = LINKS.iter().enumerate().map(|(i, (label, href))| {
        Element::item()
            .id(format!("item-{i}"))
            .child(Element::link(*label).id(format!("link-{i}")).href(*href))
    });

    Document::new(
        Element::box_()
            .id("root")
            .child(
                Element::text_input("")
                    .id("query")
                    .placeholder("Type to filter..."),
            )
            .child(
                Element::list()
                    .id("menu")
                    .data("input", "#query")
                    .data("delay", "150")
                    .children(items),
            ),
    )
}

fn render(out: &mut impl Write, doc: &Document, status: &str) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        Print("Link filter demo - type to filter, Up/Down to move, Enter to open, Esc to quit")
    )?;

    let query = doc.get("query").and_then(|e| e.value()).unwrap_or_default();
    queue!(out, cursor::MoveTo(0, 2), Print(format!("> {query}")))?;

    let mut row = 4;
    if let Some(menu) = doc.get("menu") {
        for item in menu.child_nodes() {
            if item.is_hidden() || item.has_class(NOT_MATCH_CLASS) {
                continue;
            }
            let active = item.has_class("active");
            queue!(out, cursor::MoveTo(0, row))?;
            if active {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                out,
                Print(format!("{} {}", if active { ">" } else { " " }, item.text_content())),
                SetAttribute(Attribute::Reset)
            )?;
            row += 1;
        }
    }

    queue!(out, cursor::MoveTo(0, row + 1), Print(status))?;
    out.flush()
}

fn main() -> io::Result<()> {
    let log_file = File::create("linkfilter-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = build_document();
    let mut filters = LinkFilters::new();
    if let Err(err) = filters.attach(&doc, "menu", Some(Options::new())) {
        eprintln!("failed to attach filter: {err}");
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let mut status = String::new();
    let result = (|| -> io::Result<()> {
        loop {
            render(&mut stdout, &doc, &status)?;

            let timeout = filters
                .next_deadline()
                .map(|d| d.saturating_duration_since(Instant::now()))
                .unwrap_or(Duration::from_secs(60));

            if event::poll(timeout)? {
                if let CrosstermEvent::Key(key_event) = event::read()? {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }
                    let key: Key = key_event.code.into();
                    if key == Key::Escape {
                        return Ok(());
                    }

                    let event = Event::Key {
                        target: Some("query".to_string()),
                        key,
                        modifiers: Modifiers::from(key_event.modifiers),
                    };
                    let dispatch = filters.handle_event(&mut doc, &event, Instant::now());
                    if !dispatch.default_prevented {
                        doc.apply_default(&event);
                    }
                    for notification in dispatch.events {
                        if let FilterEvent::Activate { target, .. } = notification {
                            let href = doc
                                .get(&target)
                                .and_then(|e| e.get_attr("href"))
                                .unwrap_or("#");
                            status = format!("opened {href}");
                        }
                    }
                }
            }

            for notification in filters.poll(&mut doc, Instant::now()) {
                match notification {
                    FilterEvent::Empty { .. } => status = "no results".to_string(),
                    FilterEvent::Found { .. } => status.clear(),
                    _ => {}
                }
            }
        }
    })();

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    filters.clear();
    result
}
