use serde::Serialize;
use std::collections::HashMap;

/// Attribute value with its type tag stripped.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    String(String),
    /// Decimal string exactly as stored, to avoid float precision loss.
    Number(String),
    Bool(bool),
    Set(Vec<String>),
    Map(HashMap<String, Value>),
    List(Vec<Value>),
    Null,
}
