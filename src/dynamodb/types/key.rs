use aws_sdk_dynamodb::types;
use std::collections::HashMap;

/// Primary key made of string attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    attributes: Vec<(String, String)>,
}

impl Key {
    pub fn simple<N, V>(name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: vec![(name.into(), value.into())],
        }
    }

    /// Partition attribute first, sort attribute second.
    pub fn composite<P, Q, S, T>(partition_name: P, partition: Q, sort_name: S, sort: T) -> Self
    where
        P: Into<String>,
        Q: Into<String>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            attributes: vec![
                (partition_name.into(), partition.into()),
                (sort_name.into(), sort.into()),
            ],
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }
}

impl From<Key> for HashMap<String, types::AttributeValue> {
    fn from(key: Key) -> Self {
        key.attributes
            .into_iter()
            .map(|(name, value)| (name, types::AttributeValue::S(value)))
            .collect()
    }
}
