use super::{BatchGetOutput, Client, Filter, Item, Key, ScanOutput};
use crate::dynamodb::types::AttributeValue;

use anyhow::Result;
use axum::async_trait;
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BatchGet { table_name: String, keys: Vec<Key> },
    Scan { table_name: String, filter: Option<Filter> },
}

/// In-memory store. Every item attribute is compared as a string.
#[derive(Debug, Default)]
pub struct MockClient {
    items: Vec<Item>,
    fail: bool,
    truncated: bool,
    unprocessed: usize,
    delay: Option<Duration>,
    calls: Mutex<Vec<Call>>,
    abandoned: Arc<AtomicBool>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(self, items: Vec<Item>) -> Self {
        Self { items, ..self }
    }

    pub fn failing(self) -> Self {
        Self { fail: true, ..self }
    }

    /// Scans report that the store stopped at its page limit.
    pub fn truncated(self) -> Self {
        Self {
            truncated: true,
            ..self
        }
    }

    /// Batch gets report `count` unprocessed keys.
    pub fn unprocessed(self, count: usize) -> Self {
        Self {
            unprocessed: count,
            ..self
        }
    }

    pub fn delayed(self, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..self
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// True once a delayed call was dropped before it finished.
    pub fn abandoned(&self) -> bool {
        self.abandoned.load(Ordering::SeqCst)
    }

    async fn respond(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            let mut pending = Pending {
                flag: Arc::clone(&self.abandoned),
                done: false,
            };
            tokio::time::sleep(delay).await;
            pending.done = true;
        }

        if self.fail {
            return Err(anyhow::anyhow!("mock store is unavailable"));
        }
        Ok(())
    }
}

struct Pending {
    flag: Arc<AtomicBool>,
    done: bool,
}

impl Drop for Pending {
    fn drop(&mut self) {
        if !self.done {
            self.flag.store(true, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl Client for MockClient {
    async fn batch_get(&self, table_name: &str, keys: Vec<Key>) -> Result<BatchGetOutput> {
        self.calls.lock().unwrap().push(Call::BatchGet {
            table_name: table_name.into(),
            keys: keys.clone(),
        });
        self.respond().await?;

        let items = self
            .items
            .iter()
            .filter(|item| keys.iter().any(|key| matches_key(item, key)))
            .cloned()
            .collect();

        Ok(BatchGetOutput {
            items,
            unprocessed: self.unprocessed,
        })
    }

    async fn scan(&self, table_name: &str, filter: Option<Filter>) -> Result<ScanOutput> {
        self.calls.lock().unwrap().push(Call::Scan {
            table_name: table_name.into(),
            filter: filter.clone(),
        });
        self.respond().await?;

        let items = self
            .items
            .iter()
            .filter(|item| filter.as_ref().map_or(true, |f| matches_filter(item, f)))
            .cloned()
            .collect();

        Ok(ScanOutput {
            items,
            truncated: self.truncated,
        })
    }
}

fn matches_key(item: &Item, key: &Key) -> bool {
    key.attributes()
        .iter()
        .all(|(name, value)| item.get(name) == Some(&AttributeValue::S(value.clone())))
}

fn matches_filter(item: &Item, filter: &Filter) -> bool {
    filter.names().values().all(|name| match item.get(name) {
        Some(AttributeValue::S(v)) => filter.values().values().any(|value| value == v),
        _ => false,
    })
}

/// Builds an item whose attributes are all strings.
pub fn item(attributes: &[(&str, &str)]) -> Item {
    attributes
        .iter()
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value.to_string())))
        .collect()
}
