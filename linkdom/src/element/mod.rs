mod content;
mod node;

pub use content::Content;
pub use node::{Display, Element};

use crate::selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// First element in document order (pre-order, root included) matching `selector`.
pub fn query_selector<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    let mut ancestors = Vec::new();
    query_recursive(root, selector, &mut ancestors, true)
        .into_iter()
        .next()
}

/// All elements matching `selector`, in document order.
pub fn query_selector_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut ancestors = Vec::new();
    query_recursive(root, selector, &mut ancestors, false)
}

fn query_recursive<'a>(
    element: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    first_only: bool,
) -> Vec<&'a Element> {
    let mut result = Vec::new();
    if selector.matches(element, ancestors) {
        result.push(element);
        if first_only {
            return result;
        }
    }

    ancestors.push(element);
    for child in element.child_nodes() {
        let found = query_recursive(child, selector, ancestors, first_only);
        let done = first_only && !found.is_empty();
        result.extend(found);
        if done {
            break;
        }
    }
    ancestors.pop();

    result
}
