//! Host capabilities the widget relies on.
//!
//! The widget never holds references into the host tree. It keeps element
//! ids and resolves them through [`Dom`] on every call, so any tree that can
//! answer these lookups (the bundled [`linkdom::Document`], a virtual DOM, a
//! native toolkit's node tree) can host it.

use linkdom::{Document, Element, SelectorError};

/// Per-element operations.
pub trait Node: Sized {
    fn id(&self) -> &str;

    /// Direct children in document order.
    fn children(&self) -> &[Self];

    fn children_mut(&mut self) -> &mut [Self];

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Rendered text of the element and its descendants.
    fn text_content(&self) -> String;

    /// Toggle the inline display suppression.
    fn set_hidden(&mut self, hidden: bool);

    /// Whether activating this element does something (a link).
    fn is_activation_target(&self) -> bool;

    /// Current value of a text field, `None` for other elements.
    fn value(&self) -> Option<&str>;

    /// `data-*` attributes, keys without the prefix.
    fn data_attributes(&self) -> Vec<(String, String)>;
}

/// Document-level lookups.
pub trait Dom {
    type Node: Node;

    fn node(&self, id: &str) -> Option<&Self::Node>;

    fn node_mut(&mut self, id: &str) -> Option<&mut Self::Node>;

    fn query_selector(&self, selector: &str) -> Result<Option<&Self::Node>, SelectorError>;
}

/// Depth-first search of `node`'s descendants (excluding `node` itself).
pub fn find_descendant<'a, N: Node>(node: &'a N, pred: &impl Fn(&N) -> bool) -> Option<&'a N> {
    for child in node.children() {
        if pred(child) {
            return Some(child);
        }
        if let Some(found) = find_descendant(child, pred) {
            return Some(found);
        }
    }
    None
}

impl Node for Element {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        self.child_nodes()
    }

    fn children_mut(&mut self) -> &mut [Self] {
        self.child_nodes_mut()
    }

    fn has_class(&self, class: &str) -> bool {
        Element::has_class(self, class)
    }

    fn add_class(&mut self, class: &str) {
        Element::add_class(self, class);
    }

    fn remove_class(&mut self, class: &str) {
        Element::remove_class(self, class);
    }

    fn text_content(&self) -> String {
        Element::text_content(self)
    }

    fn set_hidden(&mut self, hidden: bool) {
        Element::set_hidden(self, hidden);
    }

    fn is_activation_target(&self) -> bool {
        self.is_anchor()
    }

    fn value(&self) -> Option<&str> {
        Element::value(self)
    }

    fn data_attributes(&self) -> Vec<(String, String)> {
        let mut data: Vec<_> = self
            .data
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        data.sort();
        data
    }
}

impl Dom for Document {
    type Node = Element;

    fn node(&self, id: &str) -> Option<&Element> {
        self.get(id)
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.get_mut(id)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<&Element>, SelectorError> {
        Document::query_selector(self, selector)
    }
}
