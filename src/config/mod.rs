use crate::{
    dynamodb::query::{Partition, Table},
    ENV_CONFIG_PATH, ENV_DYNAMODB_ENDPOINT_URL, ENV_KEY_ATTRIBUTE, ENV_PARTITION_KEY,
    ENV_PARTITION_KEY_ATTRIBUTE, ENV_PORT, ENV_REGION, ENV_TABLE_NAME,
};

use std::env;
use thiserror::Error;
use tracing::warn;

mod file;

use file::ConfigFile;

const DEFAULT_REGION: &str = "us-west-2";
const DEFAULT_KEY_ATTRIBUTE: &str = "ItemId";
const DEFAULT_PARTITION_KEY_ATTRIBUTE: &str = "StoreId";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("table name is required, set `TABLE_NAME`")]
    MissingTableName,
}

#[derive(Debug, Clone)]
pub struct Config {
    endpoint_url: Option<String>,
    region: String,
    port: u16,
    table: Table,
}

impl Config {
    pub fn new() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads settings through `lookup`, layered over the YAML file it names
    /// under `CONFIG_PATH`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let file = ConfigFile::new(var(ENV_CONFIG_PATH));

        let name = var(ENV_TABLE_NAME)
            .or(file.table_name)
            .ok_or(Error::MissingTableName)?;
        let region = var(ENV_REGION)
            .or(file.region)
            .unwrap_or_else(|| DEFAULT_REGION.into());
        let port = var(ENV_PORT)
            .and_then(|p| {
                p.parse::<u16>()
                    .map_err(|err| warn!("Ignoring `{ENV_PORT}={p}`: {err}"))
                    .ok()
            })
            .or(file.port)
            .unwrap_or(DEFAULT_PORT);
        let key_attribute = var(ENV_KEY_ATTRIBUTE)
            .or(file.key_attribute)
            .unwrap_or_else(|| DEFAULT_KEY_ATTRIBUTE.into());
        let partition_attribute = var(ENV_PARTITION_KEY_ATTRIBUTE)
            .or(file.partition_key_attribute)
            .unwrap_or_else(|| DEFAULT_PARTITION_KEY_ATTRIBUTE.into());
        let partition = var(ENV_PARTITION_KEY)
            .or(file.partition_key)
            .map(|value| Partition {
                attribute: partition_attribute,
                value,
            });

        Ok(Self {
            endpoint_url: var(ENV_DYNAMODB_ENDPOINT_URL),
            region,
            port,
            table: Table {
                name,
                key_attribute,
                partition,
            },
        })
    }

    pub fn endpoint_url(&self) -> Option<String> {
        self.endpoint_url.clone()
    }

    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn it_requires_a_table_name() {
        let result = Config::from_lookup(lookup(&[]));
        assert_eq!(result.unwrap_err(), Error::MissingTableName);

        let result = Config::from_lookup(lookup(&[(ENV_TABLE_NAME, "  ")]));
        assert_eq!(result.unwrap_err(), Error::MissingTableName);
    }

    #[test]
    fn it_applies_defaults() {
        let config = Config::from_lookup(lookup(&[(ENV_TABLE_NAME, "Inventory")])).unwrap();

        assert_eq!(config.region(), "us-west-2");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.endpoint_url(), None);
        assert_eq!(
            config.table(),
            &Table {
                name: "Inventory".into(),
                key_attribute: "ItemId".into(),
                partition: None,
            }
        );
    }

    #[test]
    fn it_reads_partition_key_and_overrides() {
        let config = Config::from_lookup(lookup(&[
            (ENV_TABLE_NAME, "Inventory"),
            (ENV_REGION, "ap-northeast-1"),
            (ENV_PARTITION_KEY, "store-1"),
            (ENV_PARTITION_KEY_ATTRIBUTE, "Shop"),
            (ENV_PORT, "3000"),
            (ENV_DYNAMODB_ENDPOINT_URL, "http://localhost:8000"),
        ]))
        .unwrap();

        assert_eq!(config.region(), "ap-northeast-1");
        assert_eq!(config.port(), 3000);
        assert_eq!(config.endpoint_url(), Some("http://localhost:8000".into()));
        assert_eq!(
            config.table().partition,
            Some(Partition {
                attribute: "Shop".into(),
                value: "store-1".into(),
            })
        );
    }

    #[test]
    fn it_ignores_invalid_port() {
        let config = Config::from_lookup(lookup(&[
            (ENV_TABLE_NAME, "Inventory"),
            (ENV_PORT, "http"),
        ]))
        .unwrap();
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn it_layers_environment_over_config_file() {
        let config = Config::from_lookup(lookup(&[
            (ENV_CONFIG_PATH, "src/config/test/valid.yml"),
            (ENV_REGION, "us-east-1"),
        ]))
        .unwrap();

        assert_eq!(config.table().name, "PDC-Inventory");
        assert_eq!(config.region(), "us-east-1");
        assert_eq!(config.port(), 9090);
        assert_eq!(
            config.table().partition,
            Some(Partition {
                attribute: "StoreId".into(),
                value: "store-1".into(),
            })
        );
    }
}
