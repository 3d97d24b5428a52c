use super::{AttributeValue, Value};

use serde::Serialize;
use std::collections::HashMap;

/// Raw DynamoDB item, still tagged.
pub type Item = HashMap<String, AttributeValue>;

/// Normalized item, serialized as a flat JSON object.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Record(HashMap<String, Value>);

impl Record {
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Item> for Record {
    fn from(item: Item) -> Record {
        Record(
            item.into_iter()
                .map(|(key, val)| (key, val.normalize()))
                .collect(),
        )
    }
}
