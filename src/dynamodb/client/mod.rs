mod dynamodb;
#[cfg(test)]
mod mock;

use super::types::{Filter, Item, Key};

use anyhow::Result;
use axum::async_trait;

#[derive(Debug, Clone, Default)]
pub struct BatchGetOutput {
    pub items: Vec<Item>,
    /// Keys the store returned as unprocessed for the requested table.
    pub unprocessed: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub items: Vec<Item>,
    /// The store stopped at its page limit before reaching the end of the table.
    pub truncated: bool,
}

#[async_trait]
pub trait Client: Send + Sync {
    async fn batch_get(&self, table_name: &str, keys: Vec<Key>) -> Result<BatchGetOutput>;
    async fn scan(&self, table_name: &str, filter: Option<Filter>) -> Result<ScanOutput>;
}

pub use dynamodb::{DynamodbClient, DynamodbClientBuilder};
#[cfg(test)]
pub use mock::{item, Call, MockClient};
