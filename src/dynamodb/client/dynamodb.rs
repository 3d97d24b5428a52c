use super::{BatchGetOutput, Client, Filter, Key, ScanOutput};
use crate::dynamodb::types::into_items;

use anyhow::Result;
use aws_sdk_dynamodb::{
    config::{Builder as DbConfigBuilder, Region},
    types::{AttributeValue, KeysAndAttributes},
    Client as DbClient,
};
use axum::async_trait;
use itertools::Itertools;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    db_client: DbClient,
}

#[async_trait]
impl Client for DynamodbClient {
    async fn batch_get(&self, table_name: &str, keys: Vec<Key>) -> Result<BatchGetOutput> {
        let request = KeysAndAttributes::builder()
            .set_keys(Some(unique_keys(keys)))
            .build()?;

        let output = self
            .db_client
            .batch_get_item()
            .request_items(table_name, request)
            .send()
            .await?;

        let unprocessed = output
            .unprocessed_keys
            .as_ref()
            .and_then(|keys| keys.get(table_name))
            .map(|request| request.keys().len())
            .unwrap_or_default();

        let items = output
            .responses
            .unwrap_or_default()
            .remove(table_name)
            .unwrap_or_default();

        Ok(BatchGetOutput {
            items: into_items(items),
            unprocessed,
        })
    }

    async fn scan(&self, table_name: &str, filter: Option<Filter>) -> Result<ScanOutput> {
        let mut request = self.db_client.scan().table_name(table_name);

        if let Some(filter) = filter {
            let values: HashMap<String, AttributeValue> = filter
                .values()
                .iter()
                .map(|(placeholder, value)| (placeholder.clone(), AttributeValue::S(value.clone())))
                .collect();

            request = request
                .filter_expression(filter.expression())
                .set_expression_attribute_names(Some(filter.names().clone()))
                .set_expression_attribute_values(Some(values));
        }

        let output = request.send().await?;

        Ok(ScanOutput {
            truncated: output.last_evaluated_key.is_some(),
            items: into_items(output.items.unwrap_or_default()),
        })
    }
}

/// BatchGetItem rejects a request whose key list contains duplicates.
fn unique_keys(keys: Vec<Key>) -> Vec<HashMap<String, AttributeValue>> {
    keys.into_iter().unique().map(Into::into).collect()
}

impl DynamodbClient {
    pub async fn builder() -> DynamodbClientBuilder {
        DynamodbClientBuilder::new().await
    }
}

#[derive(Debug)]
pub struct DynamodbClientBuilder {
    db_builder: DbConfigBuilder,
}

impl DynamodbClientBuilder {
    pub async fn new() -> Self {
        let config = aws_config::load_from_env().await;
        let db_builder = DbConfigBuilder::from(&config);

        Self { db_builder }
    }

    pub fn region<T: Into<String>>(self, region: T) -> Self {
        Self {
            db_builder: self.db_builder.region(Region::new(region.into())),
        }
    }

    pub fn endpoint_url(self, url: Option<String>) -> Self {
        match url {
            Some(url) => Self {
                db_builder: self.db_builder.endpoint_url(url),
            },
            None => self,
        }
    }

    pub fn build(self) -> DynamodbClient {
        let db_config = self.db_builder.build();
        let db_client = DbClient::from_conf(db_config);

        DynamodbClient { db_client }
    }

    /// The underlying SDK client, for tooling that needs operations the
    /// reader does not expose.
    pub fn build_sdk(self) -> DbClient {
        DbClient::from_conf(self.db_builder.build())
    }
}
