use super::{
    client::Client,
    query::{Query, Table},
    types::{Item, Record},
    Error,
};

use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves requested identifiers into normalized records.
#[derive(Clone)]
pub struct Selector {
    client: Arc<dyn Client>,
    table: Table,
}

impl Selector {
    pub fn new(client: Arc<dyn Client>, table: Table) -> Self {
        Self { client, table }
    }

    /// Records for `ids`, in store order. Identifiers without a record are
    /// left out. No ids means no store call.
    pub async fn resolve(&self, ids: &[String]) -> Result<Vec<Record>, Error> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let table_name = self.table.name.as_str();

        let items = match Query::build(&self.table, ids) {
            Query::BatchGet(keys) => {
                debug!("batch get of {} keys from {table_name}", keys.len());
                let output = self.client.batch_get(table_name, keys).await?;
                if output.unprocessed > 0 {
                    warn!(
                        "{} keys were left unprocessed by {table_name}",
                        output.unprocessed
                    );
                }
                output.items
            }
            Query::Scan(filter) => {
                debug!("filtered scan of {table_name}: {}", filter.expression());
                let output = self.client.scan(table_name, Some(filter)).await?;
                if output.truncated {
                    warn!("scan of {table_name} stopped at the page limit, results are partial");
                }
                output.items
            }
        };

        Ok(normalize(items))
    }

    /// Every record of the table, unfiltered.
    pub async fn scan_all(&self) -> Result<Vec<Record>, Error> {
        let table_name = self.table.name.as_str();
        debug!("full scan of {table_name}");

        let output = self.client.scan(table_name, None).await?;
        if output.truncated {
            warn!("scan of {table_name} stopped at the page limit, results are partial");
        }

        Ok(normalize(output.items))
    }

    pub async fn get(&self, id: &str) -> Result<Option<Record>, Error> {
        let records = self.resolve(&[id.to_string()]).await?;
        Ok(records.into_iter().next())
    }
}

fn normalize(items: Vec<Item>) -> Vec<Record> {
    items.into_iter().map(Record::from).collect()
}
