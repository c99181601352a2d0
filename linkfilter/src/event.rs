/// Notifications emitted by a filter widget, each scoped to its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// A filter pass is starting; nothing has been mutated yet.
    Finding {
        container: String,
        related_target: String,
    },
    /// The pass left at least one item matched.
    Found {
        container: String,
        related_target: String,
    },
    /// The pass hid every item.
    Empty {
        container: String,
        related_target: String,
    },
    /// Enter pressed on an active item; the host should follow `target`.
    Activate { container: String, target: String },
}

impl FilterEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FilterEvent::Finding { .. } => "finding",
            FilterEvent::Found { .. } => "found",
            FilterEvent::Empty { .. } => "empty",
            FilterEvent::Activate { .. } => "activate",
        }
    }

    pub fn container(&self) -> &str {
        match self {
            FilterEvent::Finding { container, .. }
            | FilterEvent::Found { container, .. }
            | FilterEvent::Empty { container, .. }
            | FilterEvent::Activate { container, .. } => container,
        }
    }

    /// The input that triggered a filter pass.
    pub fn related_target(&self) -> Option<&str> {
        match self {
            FilterEvent::Finding { related_target, .. }
            | FilterEvent::Found { related_target, .. }
            | FilterEvent::Empty { related_target, .. } => Some(related_target),
            FilterEvent::Activate { .. } => None,
        }
    }
}

/// Outcome of routing one key event through the widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// When set, the host must skip the key's default action.
    pub default_prevented: bool,
    pub events: Vec<FilterEvent>,
}

impl Dispatch {
    pub fn prevented(events: Vec<FilterEvent>) -> Self {
        Self {
            default_prevented: true,
            events,
        }
    }

    pub fn merge(&mut self, other: Dispatch) {
        self.default_prevented |= other.default_prevented;
        self.events.extend(other.events);
    }
}
