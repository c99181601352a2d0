//! Real-time list filtering bound to a text input.
//!
//! Attach a [`LinkFilter`] to a container element; typing into the bound
//! input hides the container's direct children whose text does not contain
//! the query (after a debounce), Up/Down move an "active" class among the
//! visible children, and Enter activates the link in the active child.
//!
//! ```ignore
//! let mut filters = LinkFilters::new();
//! filters.attach(&doc, "menu", Some(Options::new().input("#query")))?;
//!
//! // event loop
//! let dispatch = filters.handle_event(&mut doc, &event, Instant::now());
//! if !dispatch.default_prevented {
//!     doc.apply_default(&event);
//! }
//! let notifications = filters.poll(&mut doc, Instant::now());
//! ```

pub mod config;
pub mod debounce;
pub mod dom;
pub mod error;
pub mod event;
pub mod query;
pub mod registry;
pub mod widget;

pub use config::{Config, DEFAULT_ACTIVE, DEFAULT_DELAY_MS, Options};
pub use debounce::Debounce;
pub use dom::{Dom, Node};
pub use error::ConfigError;
pub use event::{Dispatch, FilterEvent};
pub use query::Query;
pub use registry::LinkFilters;
pub use widget::LinkFilter;

pub use linkdom;

pub const NAME: &str = "linkfilter";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Marker class carried by items hidden by the last filter pass.
pub const NOT_MATCH_CLASS: &str = "linkfilter-not-match";
