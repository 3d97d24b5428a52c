use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use dynamo_reader::{dynamodb::client::DynamodbClientBuilder, Config};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn attribute(name: &str) -> anyhow::Result<AttributeDefinition> {
    let definition = AttributeDefinition::builder()
        .attribute_name(name)
        .attribute_type(ScalarAttributeType::S)
        .build()?;
    Ok(definition)
}

fn key(name: &str, key_type: KeyType) -> anyhow::Result<KeySchemaElement> {
    let element = KeySchemaElement::builder()
        .attribute_name(name)
        .key_type(key_type)
        .build()?;
    Ok(element)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = Config::new()?;
    let table = config.table();

    let client = DynamodbClientBuilder::new()
        .await
        .region(config.region())
        .endpoint_url(config.endpoint_url())
        .build_sdk();

    let mut request = client
        .create_table()
        .table_name(table.name.as_str())
        .billing_mode(BillingMode::PayPerRequest);

    request = match table.partition.as_ref() {
        Some(partition) => request
            .attribute_definitions(attribute(&partition.attribute)?)
            .attribute_definitions(attribute(&table.key_attribute)?)
            .key_schema(key(&partition.attribute, KeyType::Hash)?)
            .key_schema(key(&table.key_attribute, KeyType::Range)?),
        None => request
            .attribute_definitions(attribute(&table.key_attribute)?)
            .key_schema(key(&table.key_attribute, KeyType::Hash)?),
    };

    match request.send().await {
        Ok(output) => {
            if let Some(description) = output.table_description {
                info!(
                    "Created table: {}",
                    description.table_name.unwrap_or_default()
                );
            }
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }

    Ok(())
}
