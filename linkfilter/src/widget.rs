//! The filter widget.
//!
//! A [`LinkFilter`] binds one container (whose direct children are the
//! items) to one text input. Key presses on the input either navigate the
//! visible items, activate the current one, or schedule a debounced filter
//! pass that hides every item whose text does not contain the query.

use std::time::Instant;

use linkdom::{Event, Key};

use crate::NOT_MATCH_CLASS;
use crate::config::{Config, Options};
use crate::debounce::Debounce;
use crate::dom::{Dom, Node, find_descendant};
use crate::error::ConfigError;
use crate::event::{Dispatch, FilterEvent};
use crate::query::Query;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next,
    Prev,
}

/// State held while the widget is live. Dropped on dispose.
#[derive(Debug)]
struct Bound {
    config: Config,
    container: String,
    input: String,
    timer: Debounce,
}

#[derive(Debug)]
pub struct LinkFilter {
    bound: Option<Bound>,
}

impl LinkFilter {
    /// Bind a widget to `container`, layering `options` over the defaults.
    ///
    /// The input selector is resolved against `dom` once, here.
    pub fn new<D: Dom>(dom: &D, container: &str, options: &Options) -> Result<Self, ConfigError> {
        let config = Config::from_options(&Options::defaults().merge(options))?;

        if dom.node(container).is_none() {
            return Err(ConfigError::ContainerNotFound {
                id: container.to_string(),
            });
        }

        let input = dom
            .query_selector(&config.input)?
            .ok_or_else(|| ConfigError::InputNotFound {
                selector: config.input.clone(),
            })?
            .id()
            .to_string();

        log::debug!(
            "[linkfilter] attached container={} input={} active={:?} delay={:?}",
            container,
            input,
            config.active,
            config.delay
        );

        Ok(Self {
            bound: Some(Bound {
                config,
                container: container.to_string(),
                input,
                timer: Debounce::new(),
            }),
        })
    }

    pub fn config(&self) -> Option<&Config> {
        self.bound.as_ref().map(|b| &b.config)
    }

    pub fn container(&self) -> Option<&str> {
        self.bound.as_ref().map(|b| b.container.as_str())
    }

    /// Id of the bound input element.
    pub fn input(&self) -> Option<&str> {
        self.bound.as_ref().map(|b| b.input.as_str())
    }

    pub fn is_disposed(&self) -> bool {
        self.bound.is_none()
    }

    /// When the pending filter pass is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.bound.as_ref().and_then(|b| b.timer.deadline())
    }

    /// Release everything and become inert. Repeated calls do nothing.
    pub fn dispose(&mut self) {
        if let Some(bound) = self.bound.take() {
            log::debug!("[linkfilter] disposed container={}", bound.container);
        }
    }

    /// Handle an event if it is a key press aimed at the bound input.
    pub fn handle_event<D: Dom>(&mut self, dom: &mut D, event: &Event, now: Instant) -> Dispatch {
        let Event::Key {
            target: Some(target),
            key,
            ..
        } = event
        else {
            return Dispatch::default();
        };

        if self.input() != Some(target.as_str()) {
            return Dispatch::default();
        }

        self.handle_key(dom, *key, now)
    }

    /// Dispatch a key press on the bound input.
    ///
    /// Enter, Down and Up are consumed; any other key restarts the debounce
    /// and leaves the default action (typing) to the host.
    pub fn handle_key<D: Dom>(&mut self, dom: &mut D, key: Key, now: Instant) -> Dispatch {
        if self.bound.is_none() {
            return Dispatch::default();
        }

        match key {
            Key::Enter => Dispatch::prevented(self.activate_current(dom).into_iter().collect()),
            Key::Down => {
                self.focus_next(dom);
                Dispatch::prevented(Vec::new())
            }
            Key::Up => {
                self.focus_prev(dom);
                Dispatch::prevented(Vec::new())
            }
            _ => {
                if let Some(bound) = self.bound.as_mut() {
                    bound.timer.schedule(now, bound.config.delay);
                }
                Dispatch::default()
            }
        }
    }

    /// Run the filter pass if its debounce deadline has elapsed.
    pub fn poll<D: Dom>(&mut self, dom: &mut D, now: Instant) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        self.poll_with(dom, now, |_, event| events.push(event.clone()));
        events
    }

    /// Like [`poll`](Self::poll), delivering each notification to `notify`
    /// as it fires. Returns true if a pass ran.
    pub fn poll_with<D, F>(&mut self, dom: &mut D, now: Instant, notify: F) -> bool
    where
        D: Dom,
        F: FnMut(&D, &FilterEvent),
    {
        let due = self.bound.as_mut().is_some_and(|b| b.timer.fire(now));
        if due {
            self.filter_with(dom, notify);
        }
        due
    }

    /// Find the item carrying the active class and return an activation for
    /// it, or for its first link descendant when it is not a link itself.
    pub fn activate_current<D: Dom>(&self, dom: &D) -> Option<FilterEvent> {
        let bound = self.bound.as_ref()?;
        let container = dom.node(&bound.container)?;
        let active = find_descendant(container, &|n: &D::Node| n.has_class(&bound.config.active))?;

        let target = if active.is_activation_target() {
            active
        } else {
            find_descendant(active, &|n: &D::Node| n.is_activation_target())?
        };

        log::debug!("[linkfilter] activate {}", target.id());
        Some(FilterEvent::Activate {
            container: bound.container.clone(),
            target: target.id().to_string(),
        })
    }

    /// Move the active class to the next matched item. Returns true if it moved.
    pub fn focus_next<D: Dom>(&self, dom: &mut D) -> bool {
        self.step(dom, Step::Next)
    }

    /// Move the active class to the previous matched item. Returns true if it moved.
    pub fn focus_prev<D: Dom>(&self, dom: &mut D) -> bool {
        self.step(dom, Step::Prev)
    }

    // Scan toward the active item from the far end, remembering the last
    // matched item seen. Reaching the active item ends the scan, so the
    // remembered item is its neighbour, or nothing when it is at the edge.
    fn step<D: Dom>(&self, dom: &mut D, step: Step) -> bool {
        let Some(bound) = self.bound.as_ref() else {
            return false;
        };
        let Some(container) = dom.node_mut(&bound.container) else {
            return false;
        };
        let active = bound.config.active.as_str();
        let children = container.children_mut();

        let order: Vec<usize> = match step {
            Step::Next => (0..children.len()).rev().collect(),
            Step::Prev => (0..children.len()).collect(),
        };

        let mut candidate = None;
        let mut current = None;
        for i in order {
            let child = &children[i];
            if child.has_class(NOT_MATCH_CLASS) {
                continue;
            }
            if child.has_class(active) {
                current = Some(i);
                break;
            }
            candidate = Some(i);
        }

        let Some(next) = candidate else {
            return false;
        };
        if let Some(current) = current {
            children[current].remove_class(active);
        }
        children[next].add_class(active);

        log::debug!(
            "[linkfilter] {:?} {:?} -> {}",
            step,
            current.map(|i| children[i].id().to_string()),
            children[next].id()
        );
        true
    }

    /// Run a filter pass now with the current input value.
    ///
    /// Returns `Finding` followed by `Found` or `Empty`.
    pub fn filter<D: Dom>(&self, dom: &mut D) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        self.filter_with(dom, |_, event| events.push(event.clone()));
        events
    }

    /// Run a filter pass, delivering notifications to `notify` as they fire:
    /// `Finding` before any item is touched, then `Found` or `Empty` once
    /// every item has been updated.
    pub fn filter_with<D, F>(&self, dom: &mut D, mut notify: F)
    where
        D: Dom,
        F: FnMut(&D, &FilterEvent),
    {
        let Some(bound) = self.bound.as_ref() else {
            return;
        };
        let container_id = bound.container.clone();
        let related_target = bound.input.clone();

        notify(
            &*dom,
            &FilterEvent::Finding {
                container: container_id.clone(),
                related_target: related_target.clone(),
            },
        );

        let value = dom
            .node(&bound.input)
            .and_then(|n| n.value())
            .unwrap_or_default()
            .to_string();
        let query = Query::new(&value);

        let mut matched = 0usize;
        let mut hidden = 0usize;
        if let Some(container) = dom.node_mut(&bound.container) {
            for child in container.children_mut() {
                if query.matches(&child.text_content()) {
                    matched += 1;
                    child.remove_class(NOT_MATCH_CLASS);
                    child.set_hidden(false);
                } else {
                    hidden += 1;
                    child.set_hidden(true);
                    child.add_class(NOT_MATCH_CLASS);
                    child.remove_class(&bound.config.active);
                }
            }
        }

        log::debug!(
            "[linkfilter] filter container={} query={:?} matched={} hidden={}",
            container_id,
            value.trim(),
            matched,
            hidden
        );

        let outcome = if matched > 0 {
            FilterEvent::Found {
                container: container_id,
                related_target,
            }
        } else {
            FilterEvent::Empty {
                container: container_id,
                related_target,
            }
        };
        notify(&*dom, &outcome);
    }
}
