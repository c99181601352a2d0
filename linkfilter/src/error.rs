//! Construction errors.

use linkdom::SelectorError;
use thiserror::Error;

/// Why a filter widget could not be built.
///
/// Option validation messages carry the uppercased crate name as a prefix.
/// Only construction can fail. Once attached, key handling and timer polling
/// treat every unexpected state as a no-op.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An option value has the wrong primitive type.
    #[error("LINKFILTER: option \"{option}\" provided type \"{found}\" but expected type \"{expected}\"")]
    Type {
        option: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("LINKFILTER: option \"{option}\" is out of range: {value}")]
    OutOfRange { option: &'static str, value: f64 },

    #[error("LINKFILTER: option \"{option}\" is required")]
    Missing { option: &'static str },

    #[error("invalid input selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("no element matches input selector {selector:?}")]
    InputNotFound { selector: String },

    #[error("container element {id:?} does not exist")]
    ContainerNotFound { id: String },
}
