//! Widget configuration.
//!
//! Options arrive loosely typed (explicit call options and `data-*`
//! attributes on the container), are layered over the defaults, and are then
//! type-checked into an immutable [`Config`].

use std::time::Duration;

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Class marking the selected item unless configured otherwise.
pub const DEFAULT_ACTIVE: &str = "active";

/// Quiet period between the last keystroke and the filter pass.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Validated, immutable widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Class name carried by the active item.
    pub active: String,
    /// Debounce delay before a filter pass runs.
    pub delay: Duration,
    /// Selector of the bound text field.
    pub input: String,
}

impl Config {
    /// Type-check `options` (already layered over the defaults).
    pub fn from_options(options: &Options) -> Result<Self, ConfigError> {
        let active = expect_string(options, "active")?;
        let input = expect_string(options, "input")?;

        let delay_ms = match options.get("delay") {
            None => return Err(ConfigError::Missing { option: "delay" }),
            Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Some(other) => {
                return Err(ConfigError::Type {
                    option: "delay",
                    expected: "number",
                    found: type_name(other),
                });
            }
        };
        let nanos = (delay_ms * 1_000_000.0).round();
        if nanos.is_nan() || nanos < 0.0 || nanos >= u64::MAX as f64 {
            return Err(ConfigError::OutOfRange {
                option: "delay",
                value: delay_ms,
            });
        }
        let delay = Duration::from_nanos(nanos as u64);

        Ok(Self {
            active,
            delay,
            input,
        })
    }
}

fn expect_string(options: &Options, option: &'static str) -> Result<String, ConfigError> {
    match options.get(option) {
        None => Err(ConfigError::Missing { option }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ConfigError::Type {
            option,
            expected: "string",
            found: type_name(other),
        }),
    }
}

/// Primitive type name used in error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loosely typed option layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(Map<String, Value>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default layer: `{active: "active", delay: 300}`.
    pub fn defaults() -> Self {
        Self::new()
            .active(DEFAULT_ACTIVE)
            .delay(DEFAULT_DELAY_MS)
    }

    /// Build a layer from `data-*` attributes (keys without the prefix).
    ///
    /// `true`/`false`/`null`, canonical numbers and JSON objects or arrays
    /// are converted; anything else stays a string.
    pub fn from_data<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        Self(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), interpret_attribute(v.as_ref())))
                .collect(),
        )
    }

    pub fn active(self, class: impl Into<String>) -> Self {
        self.set("active", class.into())
    }

    /// Debounce delay in milliseconds.
    pub fn delay(self, ms: u64) -> Self {
        self.set("delay", ms)
    }

    pub fn input(self, selector: impl Into<String>) -> Self {
        self.set("input", selector.into())
    }

    /// Set an arbitrary, possibly ill-typed, option.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Layer `over` on top of `self`; keys present in `over` win.
    pub fn merge(mut self, over: &Options) -> Self {
        for (key, value) in &over.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }
}

fn interpret_attribute(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    if let Some(number) = canonical_number(raw) {
        return number;
    }

    let is_structured = (raw.starts_with('{') && raw.ends_with('}'))
        || (raw.starts_with('[') && raw.ends_with(']'));
    if is_structured {
        if let Ok(value) = serde_json::from_str(raw) {
            return value;
        }
    }

    Value::String(raw.to_string())
}

/// Numbers only convert when printing them back yields the same text, so
/// `"300"` becomes a number but `"0300"` or `"1e3"` stay strings.
fn canonical_number(raw: &str) -> Option<Value> {
    let n: f64 = raw.parse().ok()?;
    if !n.is_finite() {
        return None;
    }

    if n.fract() == 0.0 && n.abs() < 1e15 {
        let int = n as i64;
        return (int.to_string() == raw).then(|| Value::from(int));
    }

    (n.to_string() == raw).then(|| Value::from(n))
}
