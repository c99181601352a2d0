use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Inline display override, the analog of `style="display: none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// No inline override; the element is shown.
    #[default]
    Auto,
    /// Suppressed by an inline override.
    None,
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Lowercase tag name (`div`, `li`, `a`, `input`, ...).
    pub tag: String,

    // Content
    pub content: Content,

    // Classes and attributes
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: HashMap<String, String>,

    // Visual
    pub display: Display,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            data: HashMap::new(),
            display: Display::Auto,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::new("div")
    }

    /// An unordered list, the usual filter container.
    pub fn list() -> Self {
        Self::new("ul")
    }

    pub fn item() -> Self {
        Self::new("li")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new("span")
        }
    }

    /// Create an anchor with the given label.
    pub fn link(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            ..Self::new("a")
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self {
            content: Content::TextInput {
                value,
                cursor,
                placeholder: None,
            },
            ..Self::new("input")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if it was not present before.
    pub fn add_class(&mut self, class: &str) -> bool {
        if class.is_empty() || self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn href(self, href: impl Into<String>) -> Self {
        self.attr("href", href)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Visual
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.set_hidden(hidden);
        self
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.display = if hidden { Display::None } else { Display::Auto };
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }

    // Text input
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Current value of a text input, `None` for other elements.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::TextInput { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Replace the value of a text input, placing the cursor at the end.
    /// Returns false if this element is not a text input.
    pub fn set_value(&mut self, new_value: impl Into<String>) -> bool {
        match &mut self.content {
            Content::TextInput { value, cursor, .. } => {
                *value = new_value.into();
                *cursor = value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Anchors are the activation targets of the tree.
    pub fn is_anchor(&self) -> bool {
        self.tag == "a"
    }

    /// Concatenated text of this element and its descendants.
    /// Text inputs contribute nothing, as in a browser DOM.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::Text(s) => out.push_str(s),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Content::None | Content::TextInput { .. } => {}
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
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
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct children, empty for leaf elements.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_nodes_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_a_set() {
        let mut el = Element::item().class("a").class("a");
        assert_eq!(el.classes, vec!["a".to_string()]);
        assert!(!el.add_class("a"));
        assert!(el.add_class("b"));
        assert!(el.remove_class("a"));
        assert!(!el.remove_class("a"));
        assert!(el.has_class("b"));
    }

    #[test]
    fn text_content_walks_descendants() {
        let el = Element::item()
            .child(Element::text("Apple "))
            .child(Element::link("pie").href("/pie"))
            .child(Element::text_input("ignored"));
        assert_eq!(el.text_content(), "Apple pie");
    }

    #[test]
    fn set_value_only_applies_to_inputs() {
        let mut input = Element::text_input("ab");
        assert!(input.set_value("abc"));
        assert_eq!(input.value(), Some("abc"));

        let mut span = Element::text("x");
        assert!(!span.set_value("y"));
        assert_eq!(span.value(), None);
    }

    #[test]
    fn hidden_toggles_display_override() {
        let mut el = Element::item().hidden(true);
        assert!(el.is_hidden());
        el.set_hidden(false);
        assert_eq!(el.display, Display::Auto);
    }
}
