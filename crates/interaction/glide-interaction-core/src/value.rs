//! Value kinds carried by per-tick output changes.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Vec2,
    Bool,
    Index,
    Text,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    Float(f32),
    /// Screen-space point or size (x, y) in CSS pixels.
    Vec2([f32; 2]),
    Bool(bool),
    /// Section/item index.
    Index(u32),
    Text(String),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Float(_) => ValueKind::Float,
            Value::Vec2(_) => ValueKind::Vec2,
            Value::Bool(_) => ValueKind::Bool,
            Value::Index(_) => ValueKind::Index,
            Value::Text(_) => ValueKind::Text,
        }
    }
}
