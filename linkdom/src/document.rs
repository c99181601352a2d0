use crate::element::{find_element, find_element_mut, query_selector, query_selector_all, Element};
use crate::event::Event;
use crate::selector::{Selector, SelectorError};
use crate::text_input::{edit, TextEditResult};

/// Owns an element tree and answers lookups against it.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// First element matching `selector` in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(query_selector(&self.root, &selector))
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(query_selector_all(&self.root, &selector))
    }

    /// Run the default action for an event nobody prevented.
    ///
    /// Key presses on text inputs edit the value; returns a `Change` event
    /// when the text actually changed.
    pub fn apply_default(&mut self, event: &Event) -> Option<Event> {
        let Event::Key {
            target: Some(target),
            key,
            modifiers,
        } = event
        else {
            return None;
        };

        let element = self.get_mut(target)?;
        match edit(element, *key, *modifiers) {
            TextEditResult::Changed => {
                let text = element.value().unwrap_or_default().to_string();
                log::trace!("[document] {target} changed to {text:?}");
                Some(Event::Change {
                    target: target.clone(),
                    text,
                })
            }
            TextEditResult::Handled | TextEditResult::Ignored => None,
        }
    }
}
