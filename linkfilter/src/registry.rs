//! Per-document widget store.
//!
//! Holds at most one [`LinkFilter`] per container id, routes key events to
//! the widgets bound to the event's target input, and drives their debounce
//! timers from the host event loop.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Instant;

use linkdom::Event;

use crate::config::Options;
use crate::dom::{Dom, Node};
use crate::error::ConfigError;
use crate::event::{Dispatch, FilterEvent};
use crate::widget::LinkFilter;

#[derive(Debug, Default)]
pub struct LinkFilters {
    widgets: BTreeMap<String, LinkFilter>,
}

impl LinkFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a widget to `container`, or return the one already attached.
    ///
    /// Options are layered defaults < container `data-*` attributes <
    /// `options`, and only on first attach; later calls ignore `options`.
    pub fn attach<D: Dom>(
        &mut self,
        dom: &D,
        container: &str,
        options: Option<Options>,
    ) -> Result<&mut LinkFilter, ConfigError> {
        match self.widgets.entry(container.to_string()) {
            Entry::Occupied(entry) => {
                log::debug!("[linkfilter] {container} already attached");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let node = dom
                    .node(container)
                    .ok_or_else(|| ConfigError::ContainerNotFound {
                        id: container.to_string(),
                    })?;

                let layered = Options::from_data(node.data_attributes())
                    .merge(&options.unwrap_or_default());
                let widget = LinkFilter::new(dom, container, &layered)?;
                Ok(entry.insert(widget))
            }
        }
    }

    pub fn get(&self, container: &str) -> Option<&LinkFilter> {
        self.widgets.get(container)
    }

    pub fn get_mut(&mut self, container: &str) -> Option<&mut LinkFilter> {
        self.widgets.get_mut(container)
    }

    pub fn contains(&self, container: &str) -> bool {
        self.widgets.contains_key(container)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Dispose and forget the widget on `container`.
    /// Returns false if nothing was attached there.
    pub fn dispose(&mut self, container: &str) -> bool {
        match self.widgets.remove(container) {
            Some(mut widget) => {
                widget.dispose();
                true
            }
            None => false,
        }
    }

    /// Dispose every widget.
    pub fn clear(&mut self) {
        for widget in self.widgets.values_mut() {
            widget.dispose();
        }
        self.widgets.clear();
    }

    /// Route `event` to every widget whose input it targets.
    ///
    /// If the result is not `default_prevented`, the host should run the
    /// event's default action (e.g. `Document::apply_default`).
    pub fn handle_event<D: Dom>(&mut self, dom: &mut D, event: &Event, now: Instant) -> Dispatch {
        let mut dispatch = Dispatch::default();
        for widget in self.widgets.values_mut() {
            dispatch.merge(widget.handle_event(dom, event, now));
        }
        dispatch
    }

    /// Run every filter pass whose deadline has elapsed at `now`.
    pub fn poll<D: Dom>(&mut self, dom: &mut D, now: Instant) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        self.poll_with(dom, now, |_, event| events.push(event.clone()));
        events
    }

    /// Like [`poll`](Self::poll), delivering each notification to `notify`
    /// while the pass runs, so `Finding` is seen before any item changes.
    pub fn poll_with<D, F>(&mut self, dom: &mut D, now: Instant, mut notify: F)
    where
        D: Dom,
        F: FnMut(&D, &FilterEvent),
    {
        for widget in self.widgets.values_mut() {
            widget.poll_with(dom, now, &mut notify);
        }
    }

    /// Earliest pending deadline across all widgets.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.widgets
            .values()
            .filter_map(LinkFilter::next_deadline)
            .min()
    }
}
