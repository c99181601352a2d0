//! A small CSS selector subset.
//!
//! Supported: type selectors (`li`), the universal selector (`*`), id
//! selectors (`#query`), class selectors (`.item.active`), compounds of those
//! (`input#query.wide`) and the descendant combinator (`#search input`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected character {found:?} in selector {selector:?}")]
    Unexpected { found: char, selector: String },
    #[error("missing name after {marker:?} in selector {selector:?}")]
    MissingName { marker: char, selector: String },
}

/// One compound selector, e.g. `li.item#first`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        self.classes.iter().all(|c| element.has_class(c))
    }
}

/// A parsed selector: compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    // Outermost first
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let parts = source
            .split_whitespace()
            .map(|token| parse_compound(token, source))
            .collect::<Result<Vec<_>, _>>()?;

        if parts.is_empty() {
            return Err(SelectorError::Empty);
        }

        Ok(Self {
            source: source.trim().to_string(),
            parts,
        })
    }

    /// Check `element` against the selector. `ancestors` runs from the root
    /// down to the element's parent.
    pub fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(element) {
            return false;
        }

        // Greedy right-to-left over the ancestor chain is exact for descendant-only selectors.
        let mut remaining = rest.iter().rev().peekable();
        for ancestor in ancestors.iter().rev() {
            match remaining.peek() {
                Some(part) if part.matches(ancestor) => {
                    remaining.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        remaining.peek().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_compound(token: &str, selector: &str) -> Result<Compound, SelectorError> {
    let mut compound = Compound::default();
    let mut chars = token.chars().peekable();

    // Leading type or universal selector
    if chars.peek() == Some(&'*') {
        chars.next();
    } else {
        let tag: String = std::iter::from_fn(|| chars.next_if(|c| is_name_char(*c))).collect();
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
    }

    while let Some(marker) = chars.next() {
        if marker != '#' && marker != '.' {
            return Err(SelectorError::Unexpected {
                found: marker,
                selector: selector.to_string(),
            });
        }

        let name: String = std::iter::from_fn(|| chars.next_if(|c| is_name_char(*c))).collect();
        if name.is_empty() {
            return Err(SelectorError::MissingName {
                marker,
                selector: selector.to_string(),
            });
        }

        if marker == '#' {
            compound.id = Some(name);
        } else {
            compound.classes.push(name);
        }
    }

    Ok(compound)
}
