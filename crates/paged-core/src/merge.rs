//! Typed prop merging
//!
//! Combines the props a scroll surface needs internally with the props a
//! caller supplies for the same element. The policy is chosen by value kind:
//!
//! | origin  | incoming | result                               |
//! |---------|----------|--------------------------------------|
//! | list    | list     | origin items, then incoming items    |
//! | handler | handler  | origin runs, then incoming           |
//! | style   | style    | shallow merge, incoming keys win     |
//! | other   | any      | incoming replaces origin             |

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use paged_gesture::PropagationDecision;

use crate::event::ShellEvent;

pub type EventHandler = Arc<dyn Fn(&ShellEvent) -> PropagationDecision + Send + Sync>;

#[derive(Clone)]
pub enum PropValue {
    List(Vec<Value>),
    Handler(EventHandler),
    Style(Map<String, Value>),
    Value(Value),
}

impl PropValue {
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&ShellEvent) -> PropagationDecision + Send + Sync + 'static,
    {
        PropValue::Handler(Arc::new(f))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::List(_) => "list",
            PropValue::Handler(_) => "handler",
            PropValue::Style(_) => "style",
            PropValue::Value(_) => "value",
        }
    }

    /// Merge `incoming` over `self` according to the table above
    pub fn merge(self, incoming: PropValue) -> PropValue {
        match (self, incoming) {
            (PropValue::List(mut origin), PropValue::List(incoming)) => {
                origin.extend(incoming);
                PropValue::List(origin)
            }
            (PropValue::Handler(origin), PropValue::Handler(incoming)) => {
                PropValue::Handler(Arc::new(move |event: &ShellEvent| {
                    let first = origin(event);
                    first.combine(incoming(event))
                }))
            }
            (PropValue::Style(mut origin), PropValue::Style(incoming)) => {
                origin.extend(incoming);
                PropValue::Style(origin)
            }
            (_, incoming) => incoming,
        }
    }
}

impl std::fmt::Debug for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::List(items) => f.debug_tuple("List").field(items).finish(),
            PropValue::Handler(_) => f.write_str("Handler(..)"),
            PropValue::Style(style) => f.debug_tuple("Style").field(style).finish(),
            PropValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

/// Named props of one element
#[derive(Debug, Clone, Default)]
pub struct Props {
    values: BTreeMap<String, PropValue>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: PropValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PropValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    pub fn style(&self) -> Option<&Map<String, Value>> {
        match self.values.get("style") {
            Some(PropValue::Style(style)) => Some(style),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Invoke the handler stored under `key`, allowing propagation if there is none
    pub fn fire(&self, key: &str, event: &ShellEvent) -> PropagationDecision {
        match self.values.get(key) {
            Some(PropValue::Handler(handler)) => handler(event),
            _ => PropagationDecision::ALLOW,
        }
    }
}

/// Merge `incoming` props over `origin`, key by key
pub fn merge_props(origin: Props, incoming: Props) -> Props {
    let mut merged = origin.values;
    for (key, value) in incoming.values {
        let combined = match merged.remove(&key) {
            Some(existing) => existing.merge(value),
            None => value,
        };
        merged.insert(key, combined);
    }
    Props { values: merged }
}
