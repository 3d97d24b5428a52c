pub mod config;
pub mod dynamodb;
pub mod web;

pub use config::Config;
pub use dynamodb::{client::DynamodbClient, Selector};

pub const ENV_CONFIG_PATH: &str = "CONFIG_PATH";
pub const ENV_DYNAMODB_ENDPOINT_URL: &str = "DYNAMODB_ENDPOINT_URL";
pub const ENV_KEY_ATTRIBUTE: &str = "KEY_ATTRIBUTE";
pub const ENV_PARTITION_KEY: &str = "PARTITION_KEY";
pub const ENV_PARTITION_KEY_ATTRIBUTE: &str = "PARTITION_KEY_ATTRIBUTE";
pub const ENV_PORT: &str = "PORT";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_TABLE_NAME: &str = "TABLE_NAME";
