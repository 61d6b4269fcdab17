//! Rendered parameter containers and placeholder assignment.

use crate::error::{QueError, QueResult};
use crate::style::{ParamKind, ParamStyle};
use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;

/// Parameters produced by a render, shaped by the [`ParamStyle`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Params {
    /// Values aligned 1:1 with the placeholders in textual order.
    Positional(Vec<Value>),
    /// Values keyed by placeholder name.
    Named(BTreeMap<String, Value>),
}

impl Params {
    /// Create an empty container of the shape `style` returns.
    pub fn for_style(style: ParamStyle) -> Self {
        if style.is_named() {
            Params::Named(BTreeMap::new())
        } else {
            Params::Positional(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Params::Positional(values) => values.len(),
            Params::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow positional values, if this is a sequence.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Params::Positional(values) => Some(values),
            Params::Named(_) => None,
        }
    }

    /// Borrow the mapping, if this is named.
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Params::Named(map) => Some(map),
            Params::Positional(_) => None,
        }
    }

    /// Look up a named parameter.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(name))
    }

    /// Take the values as a sequence; fails for named parameters.
    pub fn into_positional(self) -> QueResult<Vec<Value>> {
        match self {
            Params::Positional(values) => Ok(values),
            Params::Named(_) => Err(QueError::NamedParams),
        }
    }
}

/// Assigns placeholders for one render call.
///
/// Numbered styles share a single counter across every clause of the
/// statement, so callers must bind in the order placeholders appear in the
/// SQL text.
#[derive(Debug)]
pub(crate) struct Binder {
    style: ParamStyle,
    next: usize,
    params: Params,
}

impl Binder {
    /// Create a binder whose first numbered placeholder is `offset`.
    pub(crate) fn new(style: ParamStyle, offset: usize) -> Self {
        Self {
            style,
            next: offset,
            params: Params::for_style(style),
        }
    }

    pub(crate) fn style(&self) -> ParamStyle {
        self.style
    }

    /// Bind `value` and return the placeholder text.
    ///
    /// `name` is the mapping key under named styles and is ignored otherwise.
    pub(crate) fn bind(&mut self, name: &str, value: Value) -> QueResult<String> {
        match &mut self.params {
            Params::Named(map) => {
                if map.contains_key(name) {
                    return Err(QueError::collision(name));
                }
                map.insert(name.to_string(), value);
                Ok(self.style.named(name))
            }
            Params::Positional(values) => {
                values.push(value);
                match self.style.kind() {
                    ParamKind::Numbered => {
                        let n = self.next;
                        if n == 0 {
                            return Err(QueError::InvalidOffset { offset: n });
                        }
                        self.next = n
                            .checked_add(1)
                            .ok_or(QueError::InvalidOffset { offset: n })?;
                        Ok(self.style.numbered(n))
                    }
                    _ => Ok(self.style.anonymous().to_string()),
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Params {
        self.params
    }
}
