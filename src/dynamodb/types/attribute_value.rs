use super::Value;

use aws_sdk_dynamodb::types;
use std::collections::HashMap;

/// Tagged attribute value as DynamoDB returns it.
///
/// Only the tags the reader knows how to flatten get their own variant. Binary
/// values, `NULL` and anything the SDK itself does not recognize collapse into
/// `Unknown`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    L(Vec<AttributeValue>),
    M(HashMap<String, AttributeValue>),
    N(String),
    Ns(Vec<String>),
    S(String),
    Ss(Vec<String>),
    Unknown,
}

impl AttributeValue {
    /// Flattens the tagged value into a plain one. Never fails: unrecognized
    /// tags become `Value::Null`.
    pub fn normalize(self) -> Value {
        match self {
            Self::S(v) => Value::String(v),
            Self::N(v) => Value::Number(v),
            Self::Bool(v) => Value::Bool(v),
            Self::Ss(v) | Self::Ns(v) => Value::Set(v),
            Self::M(v) => Value::Map(
                v.into_iter()
                    .map(|(key, val)| (key, val.normalize()))
                    .collect(),
            ),
            Self::L(v) => Value::List(v.into_iter().map(AttributeValue::normalize).collect()),
            Self::Unknown => Value::Null,
        }
    }
}

impl From<types::AttributeValue> for AttributeValue {
    fn from(value: types::AttributeValue) -> AttributeValue {
        match value {
            types::AttributeValue::Bool(v) => AttributeValue::Bool(v),
            types::AttributeValue::L(v) => {
                AttributeValue::L(v.into_iter().map(AttributeValue::from).collect())
            }
            types::AttributeValue::M(v) => AttributeValue::M(
                v.into_iter()
                    .map(|(key, val)| (key, AttributeValue::from(val)))
                    .collect(),
            ),
            types::AttributeValue::N(v) => AttributeValue::N(v),
            types::AttributeValue::Ns(v) => AttributeValue::Ns(v),
            types::AttributeValue::S(v) => AttributeValue::S(v),
            types::AttributeValue::Ss(v) => AttributeValue::Ss(v),
            _ => AttributeValue::Unknown,
        }
    }
}
