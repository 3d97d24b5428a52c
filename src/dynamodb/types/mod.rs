mod attribute_value;
mod filter;
mod key;
mod record;
mod value;

pub use attribute_value::AttributeValue;
pub use filter::Filter;
pub use key::Key;
pub use record::{Item, Record};
pub use value::Value;

use aws_sdk_dynamodb::types;
use std::collections::HashMap;

pub(crate) fn into_items(values: Vec<HashMap<String, types::AttributeValue>>) -> Vec<Item> {
    values.into_iter().map(into_item).collect()
}

fn into_item(value: HashMap<String, types::AttributeValue>) -> Item {
    value
        .into_iter()
        .map(|(key, val)| (key, AttributeValue::from(val)))
        .collect()
}
