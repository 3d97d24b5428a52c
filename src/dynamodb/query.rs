use super::types::{Filter, Key};

/// Where the requested items live in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    /// Attribute holding the item identifier. Sort key of a composite table.
    pub key_attribute: String,
    pub partition: Option<Partition>,
}

/// Partition attribute and the value every lookup is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub attribute: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// One composite key per identifier, fetched in a single batch.
    BatchGet(Vec<Key>),
    /// Full-table scan filtered on the key attribute. Cost grows with the
    /// table, not with the request.
    Scan(Filter),
}

impl Query {
    pub fn build(table: &Table, ids: &[String]) -> Self {
        match table.partition.as_ref() {
            Some(partition) => Self::BatchGet(
                ids.iter()
                    .map(|id| {
                        Key::composite(
                            partition.attribute.as_str(),
                            partition.value.as_str(),
                            table.key_attribute.as_str(),
                            id.as_str(),
                        )
                    })
                    .collect(),
            ),
            None => Self::Scan(Filter::any_of(&table.key_attribute, ids)),
        }
    }
}
