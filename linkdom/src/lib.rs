pub mod document;
pub mod element;
pub mod event;
pub mod selector;
pub mod text_input;

pub use document::Document;
pub use element::{Content, Display, Element};
pub use event::{Event, Key, Modifiers};
pub use selector::{Selector, SelectorError};
pub use text_input::{edit, TextEditResult};
