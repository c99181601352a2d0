use std::time::{Duration, Instant};

use linkdom::{Document, Element, Event, Key, SelectorError};
use linkfilter::{ConfigError, LinkFilters, NAME, Options};

fn create_document(list: Element) -> Document {
    Document::new(
        Element::box_()
            .id("root")
            .child(Element::text_input("").id("query"))
            .child(Element::text_input("").id("other"))
            .child(list.child(Element::item().id("apple").child(Element::text("Apple")))),
    )
}

// ============================================================================
// Attach
// ============================================================================

#[test]
fn test_attach_is_idempotent() {
    let doc = create_document(Element::list().id("list"));
    let mut filters = LinkFilters::new();

    filters
        .attach(&doc, "list", Some(Options::new().input("#query").delay(10)))
        .unwrap();
    let again = filters
        .attach(&doc, "list", Some(Options::new().input("#other").delay(99)))
        .unwrap();

    assert_eq!(again.input(), Some("query"));
    assert_eq!(again.config().unwrap().delay, Duration::from_millis(10));
    assert_eq!(filters.len(), 1);
}

#[test]
fn test_attach_reads_data_attributes() {
    let doc = create_document(
        Element::list()
            .id("list")
            .data("input", "#query")
            .data("delay", "50")
            .data("active", "current"),
    );
    let mut filters = LinkFilters::new();

    let widget = filters.attach(&doc, "list", None).unwrap();
    let config = widget.config().unwrap();
    assert_eq!(config.input, "#query");
    assert_eq!(config.delay, Duration::from_millis(50));
    assert_eq!(config.active, "current");
}

#[test]
fn test_explicit_options_override_data_attributes() {
    let doc = create_document(
        Element::list()
            .id("list")
            .data("input", "#query")
            .data("delay", "50"),
    );
    let mut filters = LinkFilters::new();

    let widget = filters
        .attach(&doc, "list", Some(Options::new().input("#other")))
        .unwrap();
    let config = widget.config().unwrap();
    assert_eq!(config.input, "#other");
    assert_eq!(config.delay, Duration::from_millis(50));
    assert_eq!(config.active, "active");
}

#[test]
fn test_attach_rejects_ill_typed_data_attribute() {
    let doc = create_document(
        Element::list()
            .id("list")
            .data("input", "#query")
            .data("delay", "soon"),
    );
    let mut filters = LinkFilters::new();

    let err = filters.attach(&doc, "list", None).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Type {
            option: "delay",
            expected: "number",
            found: "string"
        }
    );
    assert!(filters.is_empty());
}

#[test]
fn test_attach_errors() {
    let doc = create_document(Element::list().id("list"));
    let mut filters = LinkFilters::new();

    assert_eq!(
        filters.attach(&doc, "nope", Some(Options::new().input("#query"))).unwrap_err(),
        ConfigError::ContainerNotFound { id: "nope".to_string() }
    );
    assert_eq!(
        filters.attach(&doc, "list", None).unwrap_err(),
        ConfigError::Missing { option: "input" }
    );
    assert_eq!(
        filters.attach(&doc, "list", Some(Options::new().input("#missing"))).unwrap_err(),
        ConfigError::InputNotFound { selector: "#missing".to_string() }
    );
    assert!(matches!(
        filters.attach(&doc, "list", Some(Options::new().input("input > x"))),
        Err(ConfigError::Selector(SelectorError::Unexpected { found: '>', .. }))
    ));
    assert!(matches!(
        filters.attach(&doc, "list", Some(Options::new().input("#query").set("active", false))),
        Err(ConfigError::Type { option: "active", found: "boolean", .. })
    ));
    assert!(filters.is_empty());
}

#[test]
fn test_error_messages() {
    let err = ConfigError::Type {
        option: "delay",
        expected: "number",
        found: "string",
    };
    assert_eq!(
        err.to_string(),
        "LINKFILTER: option \"delay\" provided type \"string\" but expected type \"number\""
    );
    assert!(err.to_string().starts_with(&NAME.to_uppercase()));

    let err = ConfigError::OutOfRange {
        option: "delay",
        value: -1.0,
    };
    assert_eq!(err.to_string(), "LINKFILTER: option \"delay\" is out of range: -1");
}

// ============================================================================
// Dispose
// ============================================================================

#[test]
fn test_dispose_detaches() {
    let mut doc = create_document(Element::list().id("list"));
    let mut filters = LinkFilters::new();
    filters
        .attach(&doc, "list", Some(Options::new().input("#query")))
        .unwrap();
    let now = Instant::now();

    filters.handle_event(&mut doc, &Event::key("query", Key::Char('z')), now);
    assert!(filters.next_deadline().is_some());

    assert!(filters.dispose("list"));
    assert!(!filters.dispose("list"));
    assert!(!filters.contains("list"));
    assert_eq!(filters.next_deadline(), None);

    let dispatch = filters.handle_event(&mut doc, &Event::key("query", Key::Down), now);
    assert!(!dispatch.default_prevented);
    assert!(filters.poll(&mut doc, now + Duration::from_secs(1)).is_empty());
}

#[test]
fn test_dispose_unknown_is_noop() {
    let mut filters = LinkFilters::new();
    assert!(!filters.dispose("never"));
    filters.clear();
    assert!(filters.is_empty());
}

#[test]
fn test_reattach_after_dispose_uses_new_options() {
    let doc = create_document(Element::list().id("list"));
    let mut filters = LinkFilters::new();
    filters
        .attach(&doc, "list", Some(Options::new().input("#query")))
        .unwrap();
    filters.dispose("list");

    let widget = filters
        .attach(&doc, "list", Some(Options::new().input("#other")))
        .unwrap();
    assert_eq!(widget.input(), Some("other"));
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn test_widgets_only_see_their_input() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text_input("").id("q1"))
            .child(Element::text_input("").id("q2"))
            .child(Element::list().id("one").child(Element::item().id("a").child(Element::text("A"))))
            .child(Element::list().id("two").child(Element::item().id("b").child(Element::text("B")))),
    );
    let mut filters = LinkFilters::new();
    filters.attach(&doc, "one", Some(Options::new().input("#q1"))).unwrap();
    filters.attach(&doc, "two", Some(Options::new().input("#q2"))).unwrap();

    filters.handle_event(&mut doc, &Event::key("q2", Key::Down), Instant::now());
    assert!(!doc.get("a").unwrap().has_class("active"));
    assert!(doc.get("b").unwrap().has_class("active"));
}

#[test]
fn test_shared_input_drives_both_containers() {
    let mut doc = Document::new(
        Element::box_()
            .child(Element::text_input("").id("q"))
            .child(Element::list().id("one").child(Element::item().child(Element::text("Apple"))))
            .child(Element::list().id("two").child(Element::item().child(Element::text("Avocado")))),
    );
    let mut filters = LinkFilters::new();
    filters
        .attach(&doc, "one", Some(Options::new().input("#q").delay(100)))
        .unwrap();
    filters
        .attach(&doc, "two", Some(Options::new().input("#q").delay(200)))
        .unwrap();
    let now = Instant::now();

    let event = Event::key("q", Key::Char('v'));
    filters.handle_event(&mut doc, &event, now);
    doc.apply_default(&event);

    assert_eq!(filters.next_deadline(), Some(now + Duration::from_millis(100)));

    let first = filters.poll(&mut doc, now + Duration::from_millis(100));
    let names: Vec<_> = first.iter().map(|e| (e.container(), e.name())).collect();
    assert_eq!(names, vec![("one", "finding"), ("one", "empty")]);
    assert_eq!(filters.next_deadline(), Some(now + Duration::from_millis(200)));

    let second = filters.poll(&mut doc, now + Duration::from_millis(200));
    let names: Vec<_> = second.iter().map(|e| (e.container(), e.name())).collect();
    assert_eq!(names, vec![("two", "finding"), ("two", "found")]);
}
